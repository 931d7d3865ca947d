//! Extension content carried through untyped
//!
//! GPX allows arbitrary foreign-namespace content under `<extensions>`.
//! The model keeps those subtrees as raw nodes and re-emits them
//! verbatim on render rather than dropping them.

use crate::element::Element;
use crate::raw::RawNode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extensions {
    pub children: Vec<RawNode>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        Self {
            children: raw.children.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Element for Extensions {
    fn tag_name(&self) -> &'static str {
        "extensions"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        for child in &self.children {
            child.render(out, level + 1);
        }
    }
}
