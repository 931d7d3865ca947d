//! Email address element
//!
//! The GPX 1.1 schema splits an address into two attributes to deter
//! email harvesting, so the model keeps the local part and domain as
//! separate fields.

use indexmap::IndexMap;

use crate::element::{write_empty_tag, Element};
use crate::error::{Error, ErrorKind, Result};

/// An email address, split into local part (`id` attribute) and domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    pub local_part: Option<String>,
    pub domain: Option<String>,
}

// Both halves default to set-but-empty strings rather than unset,
// matching the upstream GPX library this model tracks. Pinned by a test
// in tests/parse_tests.rs.
impl Default for EmailAddress {
    fn default() -> Self {
        Self {
            local_part: Some(String::new()),
            domain: Some(String::new()),
        }
    }
}

impl EmailAddress {
    pub fn new(local_part: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            local_part: Some(local_part.into()),
            domain: Some(domain.into()),
        }
    }

    /// Split a full `local@domain` address into its two halves.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedEmail`] when the address does not
    /// contain exactly one `@`.
    pub fn from_full_address(address: &str) -> Result<Self> {
        let malformed = || {
            Error::new(ErrorKind::MalformedEmail {
                address: address.to_string(),
            })
        };
        let (local_part, domain) = address.split_once('@').ok_or_else(malformed)?;
        if domain.contains('@') {
            return Err(malformed());
        }
        Ok(Self::new(local_part, domain))
    }

    /// Build from a flat attribute mapping with keys `id` and `domain`.
    /// This variant is attribute-only; there is no tree parse path.
    pub fn from_attributes(attributes: &IndexMap<String, String>) -> Self {
        Self {
            local_part: attributes.get("id").cloned(),
            domain: attributes.get("domain").cloned(),
        }
    }

    /// The joined `local@domain` form, when both halves are set.
    pub fn full_address(&self) -> Option<String> {
        match (&self.local_part, &self.domain) {
            (Some(local_part), Some(domain)) => Some(format!("{local_part}@{domain}")),
            _ => None,
        }
    }
}

impl Element for EmailAddress {
    fn tag_name(&self) -> &'static str {
        "email"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("id", self.local_part.clone()),
            ("domain", self.domain.clone()),
        ]
    }

    // No nested content: a single self-closing line replaces the usual
    // open/children/close composition.
    fn render(&self, out: &mut String, level: usize) {
        write_empty_tag(out, level, self.tag_name(), &self.attributes());
    }
}
