//! Route: an ordered list of waypoints leading to a destination

use crate::element::{write_leaf, Element};
use crate::raw::RawNode;
use crate::types::{PointKind, Waypoint};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub description: Option<String>,
    /// GPS route number, child tag `number`.
    pub number: Option<u32>,
    /// Route points, rendered as `rtept` in order.
    pub points: Vec<Waypoint>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, mut point: Waypoint) {
        point.kind = PointKind::RoutePoint;
        self.points.push(point);
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut route = Self::default();
        for child in &raw.children {
            match child.name.as_str() {
                "name" => route.name = child.text.clone(),
                "cmt" => route.comment = child.text.clone(),
                "desc" => route.description = child.text.clone(),
                "number" => route.number = child.text.as_deref().and_then(|v| v.parse().ok()),
                "rtept" => route
                    .points
                    .push(Waypoint::from_raw(child, PointKind::RoutePoint)),
                other => tracing::debug!(tag = other, "skipping unknown route child"),
            }
        }
        route
    }
}

impl Element for Route {
    fn tag_name(&self) -> &'static str {
        "rte"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        write_leaf(out, child, "name", self.name.as_deref());
        write_leaf(out, child, "cmt", self.comment.as_deref());
        write_leaf(out, child, "desc", self.description.as_deref());
        write_leaf(out, child, "number", self.number.map(|n| n.to_string()).as_deref());
        for point in &self.points {
            point.render(out, child);
        }
    }
}
