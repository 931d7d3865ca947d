//! Geographic bounding box

use indexmap::IndexMap;

use crate::element::{write_empty_tag, Element};

/// The lat/lon extent of the data in a file. Attribute-only tag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_latitude: Option<f64>,
    pub min_longitude: Option<f64>,
    pub max_latitude: Option<f64>,
    pub max_longitude: Option<f64>,
}

impl Bounds {
    pub fn new(
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude: Some(min_latitude),
            min_longitude: Some(min_longitude),
            max_latitude: Some(max_latitude),
            max_longitude: Some(max_longitude),
        }
    }

    /// Build from a flat attribute mapping. Malformed coordinate values
    /// degrade to unset.
    pub fn from_attributes(attributes: &IndexMap<String, String>) -> Self {
        let coordinate = |key: &str| attributes.get(key).and_then(|value| value.parse().ok());
        Self {
            min_latitude: coordinate("minlat"),
            min_longitude: coordinate("minlon"),
            max_latitude: coordinate("maxlat"),
            max_longitude: coordinate("maxlon"),
        }
    }
}

impl Element for Bounds {
    fn tag_name(&self) -> &'static str {
        "bounds"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("minlat", self.min_latitude.map(|v| v.to_string())),
            ("minlon", self.min_longitude.map(|v| v.to_string())),
            ("maxlat", self.max_latitude.map(|v| v.to_string())),
            ("maxlon", self.max_longitude.map(|v| v.to_string())),
        ]
    }

    // Attribute-only tag, rendered on a single line.
    fn render(&self, out: &mut String, level: usize) {
        write_empty_tag(out, level, self.tag_name(), &self.attributes());
    }
}
