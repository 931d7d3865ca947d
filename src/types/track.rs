//! Track: recorded movement as an ordered list of segments

use crate::element::{write_leaf, Element};
use crate::raw::RawNode;
use crate::types::{PointKind, Waypoint};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub description: Option<String>,
    /// GPS track number, child tag `number`.
    pub number: Option<u32>,
    pub segments: Vec<TrackSegment>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut track = Self::default();
        for child in &raw.children {
            match child.name.as_str() {
                "name" => track.name = child.text.clone(),
                "cmt" => track.comment = child.text.clone(),
                "desc" => track.description = child.text.clone(),
                "number" => track.number = child.text.as_deref().and_then(|v| v.parse().ok()),
                "trkseg" => track.segments.push(TrackSegment::from_raw(child)),
                other => tracing::debug!(tag = other, "skipping unknown track child"),
            }
        }
        track
    }
}

impl Element for Track {
    fn tag_name(&self) -> &'static str {
        "trk"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        write_leaf(out, child, "name", self.name.as_deref());
        write_leaf(out, child, "cmt", self.comment.as_deref());
        write_leaf(out, child, "desc", self.description.as_deref());
        write_leaf(out, child, "number", self.number.map(|n| n.to_string()).as_deref());
        for segment in &self.segments {
            segment.render(out, child);
        }
    }
}

/// A contiguous run of track points. Logically disconnected stretches of
/// a track (e.g. after signal loss) go in separate segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackSegment {
    pub points: Vec<Waypoint>,
}

impl TrackSegment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, mut point: Waypoint) {
        point.kind = PointKind::TrackPoint;
        self.points.push(point);
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut segment = Self::default();
        for child in &raw.children {
            match child.name.as_str() {
                "trkpt" => segment
                    .points
                    .push(Waypoint::from_raw(child, PointKind::TrackPoint)),
                other => tracing::debug!(tag = other, "skipping unknown segment child"),
            }
        }
        segment
    }
}

impl Element for TrackSegment {
    fn tag_name(&self) -> &'static str {
        "trkseg"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        for point in &self.points {
            point.render(out, level + 1);
        }
    }
}
