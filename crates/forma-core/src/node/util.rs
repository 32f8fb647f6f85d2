//! Escaping and tag classification shared by the node model and the renderer.

use std::borrow::Cow;

/// Elements rendered without children or a closing tag.
///
/// Covers the HTML5 void elements plus the SVG shape elements that are
/// always written empty.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "circle", "col", "ellipse", "embed", "hr", "img", "input", "line", "link",
	"meta", "path", "polygon", "polyline", "rect", "source", "track", "wbr",
];

/// Returns whether `tag` is a void element. Case-insensitive.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Escapes `&`, `<`, `>`, `"` and `'` for text content.
pub(crate) fn escape_text(s: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(s)
}

/// Escapes `&`, `<`, `>` and `"` for a double-quoted attribute value.
pub(crate) fn escape_attribute(s: &str) -> Cow<'_, str> {
	html_escape::encode_double_quoted_attribute(s)
}
