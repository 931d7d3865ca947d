//! Link to external information about a GPX entity

use indexmap::IndexMap;

use crate::element::{write_leaf, Element};
use crate::raw::RawNode;

/// A hyperlink: `href` on the tag, text and MIME type as children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    pub href: Option<String>,
    /// Text of the hyperlink, child tag `text`.
    pub text: Option<String>,
    /// MIME type of the linked content, child tag `type`.
    pub mime_type: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn from_attributes(attributes: &IndexMap<String, String>) -> Self {
        Self {
            href: attributes.get("href").cloned(),
            text: attributes.get("text").cloned(),
            mime_type: attributes.get("type").cloned(),
        }
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut link = Self {
            href: raw.attributes.get("href").cloned(),
            ..Self::default()
        };
        for child in &raw.children {
            match child.name.as_str() {
                "text" => link.text = child.text.clone(),
                "type" => link.mime_type = child.text.clone(),
                other => tracing::debug!(tag = other, "skipping unknown link child"),
            }
        }
        link
    }
}

impl Element for Link {
    fn tag_name(&self) -> &'static str {
        "link"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("href", self.href.clone())]
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        write_leaf(out, level + 1, "text", self.text.as_deref());
        write_leaf(out, level + 1, "type", self.mime_type.as_deref());
    }
}
