//! The GPX document root
//!
//! Owns the top-level element list and drives full-document render and
//! parse. Top-level render order is metadata, waypoints, routes, tracks,
//! extensions; the order is part of the format contract.

use crate::element::{Element, LINE_END};
use crate::raw::RawNode;
use crate::types::{Extensions, Metadata, PointKind, Route, Track, Waypoint};

/// GPX 1.1 namespace emitted on the root tag.
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

const GPX_VERSION: &str = "1.1";
const DEFAULT_CREATOR: &str = "gpxtree";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// A complete GPX document. Exclusively owns its element tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub version: String,
    /// Name of the program that created the file.
    pub creator: String,
    pub metadata: Option<Metadata>,
    pub waypoints: Vec<Waypoint>,
    pub routes: Vec<Route>,
    pub tracks: Vec<Track>,
    pub extensions: Option<Extensions>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: GPX_VERSION.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
            metadata: None,
            waypoints: Vec::new(),
            routes: Vec::new(),
            tracks: Vec::new(),
            extensions: None,
        }
    }
}

impl Document {
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            ..Self::default()
        }
    }

    /// Render the whole document: XML declaration, then the `gpx` root
    /// element at indentation level 0.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push_str(LINE_END);
        Element::render(self, &mut out, 0);
        out
    }

    /// Build from a parsed node tree, dispatching each top-level child
    /// by tag name. Unrecognized top-level tags are skipped.
    pub fn from_raw(raw: &RawNode) -> Self {
        let mut document = Self {
            version: raw
                .attributes
                .get("version")
                .cloned()
                .unwrap_or_else(|| GPX_VERSION.to_string()),
            creator: raw
                .attributes
                .get("creator")
                .cloned()
                .unwrap_or_else(|| DEFAULT_CREATOR.to_string()),
            ..Self::default()
        };
        for child in &raw.children {
            match child.name.as_str() {
                "metadata" => document.metadata = Some(Metadata::from_raw(child)),
                "wpt" => document
                    .waypoints
                    .push(Waypoint::from_raw(child, PointKind::Waypoint)),
                "rte" => document.routes.push(Route::from_raw(child)),
                "trk" => document.tracks.push(Track::from_raw(child)),
                "extensions" => document.extensions = Some(Extensions::from_raw(child)),
                other => tracing::debug!(tag = other, "skipping unknown top-level tag"),
            }
        }
        document
    }
}

impl Element for Document {
    fn tag_name(&self) -> &'static str {
        "gpx"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("version", Some(self.version.clone())),
            ("creator", Some(self.creator.clone())),
            ("xmlns", Some(GPX_NAMESPACE.to_string())),
        ]
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        if let Some(metadata) = &self.metadata {
            metadata.render(out, child);
        }
        for waypoint in &self.waypoints {
            waypoint.render(out, child);
        }
        for route in &self.routes {
            route.render(out, child);
        }
        for track in &self.tracks {
            track.render(out, child);
        }
        if let Some(extensions) = &self.extensions {
            extensions.render(out, child);
        }
    }
}
