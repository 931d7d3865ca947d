//! Copyright information for a GPX file
//!
//! Carries the year of first publication, a license URI and the author
//! (copyright holder) name.

use indexmap::IndexMap;
use time::Date;

use crate::date;
use crate::element::{write_leaf, Element};
use crate::raw::RawNode;

/// Copyright info attached to GPX metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Copyright {
    /// Year of the first publication of this copyrighted work.
    pub year: Option<Date>,
    /// License of the file, as a URL to the license's documentation.
    pub license: Option<String>,
    /// Author / copyright holder's name. At least this field should be
    /// set for the element to be meaningful; not enforced at the type
    /// level.
    pub author: Option<String>,
}

impl Copyright {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copyright held by `author`, with the year stamped to the current
    /// year.
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            year: Some(date::current_year()),
            license: None,
            author: Some(author.into()),
        }
    }

    /// Build from a flat attribute mapping, the shape a tokenizer
    /// produces for a single tag's attributes.
    pub fn from_attributes(attributes: &IndexMap<String, String>) -> Self {
        Self {
            year: date::parse_year(attributes.get("year").map(String::as_str)),
            license: attributes.get("license").cloned(),
            author: attributes.get("author").cloned(),
        }
    }

    /// Build from a parsed node tree: `author` from the attributes,
    /// `year` and `license` from child tags. Unknown children are
    /// skipped.
    pub fn from_raw(raw: &RawNode) -> Self {
        let mut copyright = Self {
            author: raw.attributes.get("author").cloned(),
            ..Self::default()
        };
        for child in &raw.children {
            match child.name.as_str() {
                "year" => copyright.year = date::parse_year(child.text.as_deref()),
                "license" => copyright.license = child.text.clone(),
                other => tracing::debug!(tag = other, "skipping unknown copyright child"),
            }
        }
        copyright
    }
}

impl Element for Copyright {
    fn tag_name(&self) -> &'static str {
        "copyright"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("author", self.author.clone())]
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        write_leaf(out, level + 1, "year", date::format_year(self.year).as_deref());
        write_leaf(out, level + 1, "license", self.license.as_deref());
    }
}
