//! Waypoint, the shared point type of the GPX tree
//!
//! The same structure appears under three tags depending on position:
//! `wpt` at the top level, `rtept` inside a route and `trkpt` inside a
//! track segment. The tag is carried as a [`PointKind`], not re-derived
//! from context at render time.

use time::OffsetDateTime;

use crate::date;
use crate::element::{write_leaf, Element};
use crate::raw::RawNode;
use crate::types::{Extensions, Link};

/// Which positional tag a [`Waypoint`] renders under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointKind {
    /// Top-level `wpt`.
    #[default]
    Waypoint,
    /// `rtept` inside a route.
    RoutePoint,
    /// `trkpt` inside a track segment.
    TrackPoint,
}

impl PointKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Waypoint => "wpt",
            Self::RoutePoint => "rtept",
            Self::TrackPoint => "trkpt",
        }
    }
}

/// A single point: position attributes plus descriptive children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Waypoint {
    pub kind: PointKind,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Elevation in meters, child tag `ele`.
    pub elevation: Option<f64>,
    /// Creation/recording timestamp, child tag `time`.
    pub time: Option<OffsetDateTime>,
    pub name: Option<String>,
    /// GPS comment, child tag `cmt`.
    pub comment: Option<String>,
    /// Child tag `desc`.
    pub description: Option<String>,
    /// Source of the data, child tag `src`.
    pub source: Option<String>,
    /// Display symbol name, child tag `sym`.
    pub symbol: Option<String>,
    /// Classification, child tag `type`.
    pub type_: Option<String>,
    pub link: Option<Link>,
    pub extensions: Option<Extensions>,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn for_kind(kind: PointKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build from a parsed node tree under the given positional tag.
    /// Malformed coordinates degrade to unset; unknown children are
    /// skipped.
    pub fn from_raw(raw: &RawNode, kind: PointKind) -> Self {
        let mut waypoint = Self {
            kind,
            latitude: raw.attributes.get("lat").and_then(|v| v.parse().ok()),
            longitude: raw.attributes.get("lon").and_then(|v| v.parse().ok()),
            ..Self::default()
        };
        for child in &raw.children {
            match child.name.as_str() {
                "ele" => waypoint.elevation = child.text.as_deref().and_then(|v| v.parse().ok()),
                "time" => waypoint.time = date::parse_timestamp(child.text.as_deref()),
                "name" => waypoint.name = child.text.clone(),
                "cmt" => waypoint.comment = child.text.clone(),
                "desc" => waypoint.description = child.text.clone(),
                "src" => waypoint.source = child.text.clone(),
                "sym" => waypoint.symbol = child.text.clone(),
                "type" => waypoint.type_ = child.text.clone(),
                "link" => waypoint.link = Some(Link::from_raw(child)),
                "extensions" => waypoint.extensions = Some(Extensions::from_raw(child)),
                other => tracing::debug!(tag = other, "skipping unknown waypoint child"),
            }
        }
        waypoint
    }
}

impl Element for Waypoint {
    fn tag_name(&self) -> &'static str {
        self.kind.tag()
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("lat", self.latitude.map(|v| v.to_string())),
            ("lon", self.longitude.map(|v| v.to_string())),
        ]
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        write_leaf(out, child, "ele", self.elevation.map(|v| v.to_string()).as_deref());
        write_leaf(out, child, "time", date::format_timestamp(self.time).as_deref());
        write_leaf(out, child, "name", self.name.as_deref());
        write_leaf(out, child, "cmt", self.comment.as_deref());
        write_leaf(out, child, "desc", self.description.as_deref());
        write_leaf(out, child, "src", self.source.as_deref());
        write_leaf(out, child, "sym", self.symbol.as_deref());
        write_leaf(out, child, "type", self.type_.as_deref());
        if let Some(link) = &self.link {
            link.render(out, child);
        }
        if let Some(extensions) = &self.extensions {
            extensions.render(out, child);
        }
    }
}
