//! Generic parsed-XML node, the input shape for typed parsing
//!
//! A [`RawNode`] tree is what an external XML tokenizer hands this crate:
//! a tag name, its attributes in document order, optional text content
//! and child nodes. Typed parsing walks this tree; the [`Extensions`]
//! container also keeps foreign subtrees in this form and re-renders
//! them verbatim.
//!
//! [`Extensions`]: crate::types::Extensions

use indexmap::IndexMap;

use crate::element::{
    indent, push_attributes, write_close_tag, write_empty_tag, write_open_tag, LINE_END,
};

/// A generic parsed-XML node. Immutable once produced by the tokenizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawNode {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Re-emit this subtree as markup, attributes in document order.
    ///
    /// Used for extension content the typed model does not understand;
    /// the node is reproduced as-is rather than dropped.
    pub fn render(&self, out: &mut String, level: usize) {
        let attributes: Vec<(&str, Option<String>)> = self
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), Some(value.clone())))
            .collect();

        if self.children.is_empty() {
            match &self.text {
                Some(text) => {
                    // Leaf with text renders on a single line.
                    out.push_str(&indent(level));
                    out.push('<');
                    out.push_str(&self.name);
                    push_attributes(out, &attributes);
                    out.push('>');
                    out.push_str(text);
                    out.push_str("</");
                    out.push_str(&self.name);
                    out.push('>');
                    out.push_str(LINE_END);
                }
                None => write_empty_tag(out, level, &self.name, &attributes),
            }
            return;
        }

        write_open_tag(out, level, &self.name, &attributes);
        for child in &self.children {
            child.render(out, level + 1);
        }
        write_close_tag(out, level, &self.name);
    }
}
