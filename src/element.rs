//! Shared render protocol for GPX elements
//!
//! Every concrete node type implements [`Element`] and supplies only its
//! tag name, attribute list and child rendering. The open/close tag
//! syntax, attribute omission and indentation arithmetic live here, in
//! one place, so a variant cannot produce mismatched tags or drift out
//! of the indentation scheme.

/// Indentation unit, two spaces per nesting level.
pub const INDENT_UNIT: &str = "  ";

/// Line terminator after every emitted tag. CRLF is part of the GPX
/// output contract, not a platform choice.
pub const LINE_END: &str = "\r\n";

/// Whitespace prefix for a nesting level.
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Emit an opening tag with its set attributes, in the order given.
/// Attributes whose value is `None` are skipped entirely.
pub fn write_open_tag(
    out: &mut String,
    level: usize,
    tag: &str,
    attributes: &[(&str, Option<String>)],
) {
    out.push_str(&indent(level));
    out.push('<');
    out.push_str(tag);
    push_attributes(out, attributes);
    out.push('>');
    out.push_str(LINE_END);
}

/// Emit a one-line self-closing tag. Used by attribute-only variants
/// that carry no nested content.
pub fn write_empty_tag(
    out: &mut String,
    level: usize,
    tag: &str,
    attributes: &[(&str, Option<String>)],
) {
    out.push_str(&indent(level));
    out.push('<');
    out.push_str(tag);
    push_attributes(out, attributes);
    out.push_str("/>");
    out.push_str(LINE_END);
}

/// Emit a closing tag.
pub fn write_close_tag(out: &mut String, level: usize, tag: &str) {
    out.push_str(&indent(level));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out.push_str(LINE_END);
}

/// Emit a scalar field as an indented `<name>value</name>` leaf line.
/// Emits nothing when the value is unset.
pub fn write_leaf(out: &mut String, level: usize, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(&indent(level));
        out.push('<');
        out.push_str(name);
        out.push('>');
        out.push_str(value);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out.push_str(LINE_END);
    }
}

pub(crate) fn push_attributes(out: &mut String, attributes: &[(&str, Option<String>)]) {
    for (name, value) in attributes {
        if let Some(value) = value {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

/// The polymorphic GPX node protocol.
///
/// [`render`](Element::render) is the only entry point callers use; it is
/// the fixed composition open tag, child tags, close tag. Variants with
/// no nested content (e.g. `email`, `bounds`) override `render` itself to
/// short-circuit to a one-line self-closing tag.
pub trait Element {
    /// The fixed markup tag for this variant.
    fn tag_name(&self) -> &'static str;

    /// Attributes in their fixed, variant-defined render order.
    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        Vec::new()
    }

    fn open_tag(&self, out: &mut String, level: usize) {
        write_open_tag(out, level, self.tag_name(), &self.attributes());
    }

    /// Scalar leaves and nested child elements, rendered at `level + 1`.
    fn child_tags(&self, _out: &mut String, _level: usize) {}

    fn close_tag(&self, out: &mut String, level: usize) {
        write_close_tag(out, level, self.tag_name());
    }

    fn render(&self, out: &mut String, level: usize) {
        self.open_tag(out, level);
        self.child_tags(out, level);
        self.close_tag(out, level);
    }
}
