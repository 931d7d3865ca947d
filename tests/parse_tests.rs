//! Parse tests: raw-tree and flat-attribute paths, lenient skipping of
//! unknown input, and round trips through render + parse.

use indexmap::IndexMap;

use gpxtree::{
    date, Bounds, Copyright, Document, Element, EmailAddress, ErrorKind, Extensions, Metadata,
    PointKind, RawNode, Waypoint,
};

#[test]
fn test_copyright_from_raw() {
    let raw = RawNode::new("copyright")
        .with_attr("author", "Jane Doe")
        .with_child(RawNode::new("year").with_text("2018"))
        .with_child(RawNode::new("license").with_text("https://example.com/license"));
    let copyright = Copyright::from_raw(&raw);
    assert_eq!(copyright.author.as_deref(), Some("Jane Doe"));
    assert_eq!(date::format_year(copyright.year).as_deref(), Some("2018"));
    assert_eq!(
        copyright.license.as_deref(),
        Some("https://example.com/license")
    );
}

#[test]
fn test_copyright_from_attributes() {
    let mut attributes = IndexMap::new();
    attributes.insert("author".to_string(), "Jane Doe".to_string());
    attributes.insert("year".to_string(), "2019".to_string());
    let copyright = Copyright::from_attributes(&attributes);
    assert_eq!(copyright.author.as_deref(), Some("Jane Doe"));
    assert_eq!(date::format_year(copyright.year).as_deref(), Some("2019"));
    assert_eq!(copyright.license, None);
}

#[test]
fn test_copyright_ignores_unknown_children() {
    let raw = RawNode::new("copyright")
        .with_attr("author", "Jane Doe")
        .with_child(RawNode::new("registration").with_text("EU-1234"))
        .with_child(RawNode::new("year").with_text("2018"));
    let copyright = Copyright::from_raw(&raw);
    assert_eq!(copyright.author.as_deref(), Some("Jane Doe"));
    assert_eq!(date::format_year(copyright.year).as_deref(), Some("2018"));

    // the unrecognized child is dropped on re-render
    let mut out = String::new();
    copyright.render(&mut out, 0);
    assert!(!out.contains("registration"));
    assert!(out.contains("<year>2018</year>"));
}

#[test]
fn test_copyright_malformed_year_degrades_to_unset() {
    let raw = RawNode::new("copyright").with_child(RawNode::new("year").with_text("MMXVIII"));
    assert_eq!(Copyright::from_raw(&raw).year, None);
}

#[test]
fn test_copyright_with_author_stamps_current_year() {
    let copyright = Copyright::with_author("Jane Doe");
    assert_eq!(copyright.author.as_deref(), Some("Jane Doe"));
    assert!(copyright.year.is_some());
    assert_eq!(copyright.license, None);
}

#[test]
fn test_email_split() {
    let email = EmailAddress::from_full_address("user@example.com").unwrap();
    assert_eq!(email.local_part.as_deref(), Some("user"));
    assert_eq!(email.domain.as_deref(), Some("example.com"));
    assert_eq!(email.full_address().as_deref(), Some("user@example.com"));
}

#[test]
fn test_email_without_at_is_an_error() {
    let err = EmailAddress::from_full_address("bad-address").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MalformedEmail {
            address: "bad-address".into()
        }
    );
}

#[test]
fn test_email_with_multiple_segments_is_an_error() {
    assert!(EmailAddress::from_full_address("a@b@c").is_err());
}

#[test]
fn test_email_from_attributes() {
    let mut attributes = IndexMap::new();
    attributes.insert("id".to_string(), "user".to_string());
    attributes.insert("domain".to_string(), "example.com".to_string());
    let email = EmailAddress::from_attributes(&attributes);
    assert_eq!(email.local_part.as_deref(), Some("user"));
    assert_eq!(email.domain.as_deref(), Some("example.com"));
}

// Default yields set-but-empty halves, not unset ones. Inherited from
// the upstream model; this test pins the behavior so a change to it is
// a deliberate decision.
#[test]
fn test_email_default_is_empty_strings_not_unset() {
    let email = EmailAddress::default();
    assert_eq!(email.local_part.as_deref(), Some(""));
    assert_eq!(email.domain.as_deref(), Some(""));
}

#[test]
fn test_bounds_from_attributes_with_malformed_value() {
    let mut attributes = IndexMap::new();
    attributes.insert("minlat".to_string(), "46.0".to_string());
    attributes.insert("minlon".to_string(), "east".to_string());
    let bounds = Bounds::from_attributes(&attributes);
    assert_eq!(bounds.min_latitude, Some(46.0));
    assert_eq!(bounds.min_longitude, None);
    assert_eq!(bounds.max_latitude, None);
}

#[test]
fn test_waypoint_from_raw() {
    let raw = RawNode::new("wpt")
        .with_attr("lat", "47.5")
        .with_attr("lon", "8.6")
        .with_child(RawNode::new("ele").with_text("401.5"))
        .with_child(RawNode::new("time").with_text("2018-11-22T10:30:00Z"))
        .with_child(RawNode::new("name").with_text("Start"))
        .with_child(RawNode::new("type").with_text("summit"));
    let waypoint = Waypoint::from_raw(&raw, PointKind::Waypoint);
    assert_eq!(waypoint.latitude, Some(47.5));
    assert_eq!(waypoint.longitude, Some(8.6));
    assert_eq!(waypoint.elevation, Some(401.5));
    assert_eq!(
        date::format_timestamp(waypoint.time).as_deref(),
        Some("2018-11-22T10:30:00Z")
    );
    assert_eq!(waypoint.name.as_deref(), Some("Start"));
    assert_eq!(waypoint.type_.as_deref(), Some("summit"));
}

#[test]
fn test_waypoint_malformed_coordinates_degrade_to_unset() {
    let raw = RawNode::new("wpt").with_attr("lat", "north").with_attr("lon", "8.6");
    let waypoint = Waypoint::from_raw(&raw, PointKind::Waypoint);
    assert_eq!(waypoint.latitude, None);
    assert_eq!(waypoint.longitude, Some(8.6));
}

#[test]
fn test_metadata_from_raw_dispatches_nested_elements() {
    let raw = RawNode::new("metadata")
        .with_child(RawNode::new("name").with_text("ride"))
        .with_child(
            RawNode::new("author")
                .with_child(RawNode::new("name").with_text("Jane Doe"))
                .with_child(
                    RawNode::new("email")
                        .with_attr("id", "jane")
                        .with_attr("domain", "example.com"),
                ),
        )
        .with_child(RawNode::new("copyright").with_attr("author", "Jane Doe"))
        .with_child(
            RawNode::new("bounds")
                .with_attr("minlat", "46.0")
                .with_attr("minlon", "7.0")
                .with_attr("maxlat", "47.0")
                .with_attr("maxlon", "8.0"),
        );
    let metadata = Metadata::from_raw(&raw);
    assert_eq!(metadata.name.as_deref(), Some("ride"));
    let author = metadata.author.unwrap();
    assert_eq!(author.name.as_deref(), Some("Jane Doe"));
    assert_eq!(
        author.email.unwrap().full_address().as_deref(),
        Some("jane@example.com")
    );
    assert_eq!(metadata.copyright.unwrap().author.as_deref(), Some("Jane Doe"));
    assert_eq!(metadata.bounds.unwrap().max_longitude, Some(8.0));
}

#[test]
fn test_extensions_keep_foreign_subtrees() {
    let raw = RawNode::new("extensions").with_child(
        RawNode::new("power")
            .with_attr("unit", "watts")
            .with_text("250"),
    );
    let extensions = Extensions::from_raw(&raw);
    assert_eq!(extensions.children.len(), 1);

    let mut out = String::new();
    extensions.render(&mut out, 0);
    assert_eq!(
        out,
        "<extensions>\r\n  <power unit=\"watts\">250</power>\r\n</extensions>\r\n"
    );
}

#[test]
fn test_document_from_raw_dispatch() {
    let raw = RawNode::new("gpx")
        .with_attr("version", "1.1")
        .with_attr("creator", "unit-test")
        .with_child(RawNode::new("metadata").with_child(RawNode::new("name").with_text("demo")))
        .with_child(RawNode::new("wpt").with_attr("lat", "47.5").with_attr("lon", "8.6"))
        .with_child(RawNode::new("rte"))
        .with_child(RawNode::new("trk").with_child(RawNode::new("trkseg").with_child(
            RawNode::new("trkpt").with_attr("lat", "47.0").with_attr("lon", "8.0"),
        )))
        .with_child(RawNode::new("proprietary"));
    let document = Document::from_raw(&raw);
    assert_eq!(document.creator, "unit-test");
    assert_eq!(document.metadata.as_ref().unwrap().name.as_deref(), Some("demo"));
    assert_eq!(document.waypoints.len(), 1);
    assert_eq!(document.routes.len(), 1);
    assert_eq!(document.tracks[0].segments[0].points.len(), 1);
    assert_eq!(document.tracks[0].segments[0].points[0].kind, PointKind::TrackPoint);

    // the unrecognized top-level tag is gone after a round trip
    assert!(!document.render().contains("proprietary"));
}

#[test]
fn test_document_defaults_when_attributes_absent() {
    let document = Document::from_raw(&RawNode::new("gpx"));
    assert_eq!(document.version, "1.1");
    assert_eq!(document.creator, "gpxtree");
}

#[test]
fn test_round_trip_preserves_set_fields() {
    let raw = RawNode::new("gpx")
        .with_attr("creator", "unit-test")
        .with_child(
            RawNode::new("metadata")
                .with_child(RawNode::new("name").with_text("ride"))
                .with_child(RawNode::new("time").with_text("2020-06-01T08:00:00Z")),
        )
        .with_child(
            RawNode::new("wpt")
                .with_attr("lat", "47.5")
                .with_attr("lon", "8.6")
                .with_child(RawNode::new("name").with_text("Start")),
        );
    let document = Document::from_raw(&raw);
    let rendered = document.render();

    assert!(rendered.contains("<name>ride</name>"));
    assert!(rendered.contains("<time>2020-06-01T08:00:00Z</time>"));
    assert!(rendered.contains("<wpt lat=\"47.5\" lon=\"8.6\">"));
    assert!(rendered.contains("<name>Start</name>"));
    // unset optionals leave no trace
    assert!(!rendered.contains("<desc>"));
    assert!(!rendered.contains("<keywords>"));
    assert!(!rendered.contains("<ele>"));
}
