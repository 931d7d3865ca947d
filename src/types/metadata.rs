//! File-level metadata

use time::OffsetDateTime;

use crate::date;
use crate::element::{write_leaf, Element};
use crate::raw::RawNode;
use crate::types::{Bounds, Copyright, Link, Person};

/// Information about a GPX file as a whole: name, description, author,
/// copyright, creation time, keywords and the data's bounding box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<Person>,
    pub copyright: Option<Copyright>,
    pub link: Option<Link>,
    pub time: Option<OffsetDateTime>,
    pub keywords: Option<String>,
    pub bounds: Option<Bounds>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut metadata = Self::default();
        for child in &raw.children {
            match child.name.as_str() {
                "name" => metadata.name = child.text.clone(),
                "desc" => metadata.description = child.text.clone(),
                "author" => metadata.author = Some(Person::from_raw(child)),
                "copyright" => metadata.copyright = Some(Copyright::from_raw(child)),
                "link" => metadata.link = Some(Link::from_raw(child)),
                "time" => metadata.time = date::parse_timestamp(child.text.as_deref()),
                "keywords" => metadata.keywords = child.text.clone(),
                // bounds is attribute-only, so it takes the flat parse path
                "bounds" => metadata.bounds = Some(Bounds::from_attributes(&child.attributes)),
                other => tracing::debug!(tag = other, "skipping unknown metadata child"),
            }
        }
        metadata
    }
}

impl Element for Metadata {
    fn tag_name(&self) -> &'static str {
        "metadata"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        write_leaf(out, child, "name", self.name.as_deref());
        write_leaf(out, child, "desc", self.description.as_deref());
        if let Some(author) = &self.author {
            author.render(out, child);
        }
        if let Some(copyright) = &self.copyright {
            copyright.render(out, child);
        }
        if let Some(link) = &self.link {
            link.render(out, child);
        }
        write_leaf(out, child, "time", date::format_timestamp(self.time).as_deref());
        write_leaf(out, child, "keywords", self.keywords.as_deref());
        if let Some(bounds) = &self.bounds {
            bounds.render(out, child);
        }
    }
}
