//! Person element, used as the metadata author

use crate::element::{write_leaf, Element};
use crate::raw::RawNode;
use crate::types::{EmailAddress, Link};

/// A person or organization. Renders under the `author` tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub link: Option<Link>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawNode) -> Self {
        let mut person = Self::default();
        for child in &raw.children {
            match child.name.as_str() {
                "name" => person.name = child.text.clone(),
                // email is attribute-only, so it takes the flat parse path
                "email" => person.email = Some(EmailAddress::from_attributes(&child.attributes)),
                "link" => person.link = Some(Link::from_raw(child)),
                other => tracing::debug!(tag = other, "skipping unknown person child"),
            }
        }
        person
    }
}

impl Element for Person {
    fn tag_name(&self) -> &'static str {
        "author"
    }

    fn child_tags(&self, out: &mut String, level: usize) {
        let child = level + 1;
        write_leaf(out, child, "name", self.name.as_deref());
        if let Some(email) = &self.email {
            email.render(out, child);
        }
        if let Some(link) = &self.link {
            link.render(out, child);
        }
    }
}
