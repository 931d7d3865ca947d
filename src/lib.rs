//! gpxtree - GPX element-tree model
//!
//! Typed GPX 1.1 nodes that parse themselves out of a generic raw-XML
//! node tree (produced by an external tokenizer) and render themselves
//! back into deterministic, indented GPX markup.
//!
//! # Quick Start
//!
//! ```
//! use gpxtree::{Document, Waypoint};
//!
//! let mut document = Document::new("my-app");
//! document.waypoints.push(Waypoint::new(47.5, 8.6));
//! let gpx = document.render();
//! assert!(gpx.contains("<wpt lat=\"47.5\" lon=\"8.6\">"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod raw;
pub use raw::RawNode;

pub mod date;

pub mod element;
pub use element::Element;

pub mod types;
pub use types::{
    Bounds, Copyright, EmailAddress, Extensions, Link, Metadata, Person, PointKind, Route, Track,
    TrackSegment, Waypoint,
};

pub mod document;
pub use document::{Document, GPX_NAMESPACE};

/// Parse a GPX document from a raw node tree.
pub fn from_raw(raw: &RawNode) -> Document {
    Document::from_raw(raw)
}

/// Render a GPX document to its full markup string.
pub fn to_gpx_string(document: &Document) -> String {
    document.render()
}
