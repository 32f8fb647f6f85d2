//! Attribute helpers.
//!
//! Each helper returns a [`Node::Attribute`], so it can sit in the same
//! argument list as an element's children. Names are emitted exactly as
//! written here, which keeps SVG's camelCase attributes such as `viewBox`
//! intact.

use std::borrow::Cow;

use super::{Node, attr, attr_valueless};

macro_rules! define_attribute {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name(value: impl Into<Cow<'static, str>>) -> Node {
			attr($attr, value)
		}
	};
}

macro_rules! define_flag {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name() -> Node {
			attr_valueless($attr)
		}
	};
}

// ============================================================================
// Global attributes
// ============================================================================

define_attribute!(
	/// The `class` attribute. Compose the value with [`cn!`](crate::cn).
	class, "class"
);
define_attribute!(
	/// The `id` attribute
	id, "id"
);
define_attribute!(
	/// The `role` attribute
	role, "role"
);
define_attribute!(
	/// The `style` attribute (inline CSS)
	style, "style"
);
define_attribute!(
	/// The `title` attribute
	title, "title"
);
define_attribute!(
	/// The `lang` attribute
	lang, "lang"
);
define_attribute!(
	/// The `dir` attribute
	dir, "dir"
);
define_attribute!(
	/// The `tabindex` attribute
	tab_index, "tabindex"
);

// ============================================================================
// Links and media
// ============================================================================

define_attribute!(
	/// The `href` attribute
	href, "href"
);
define_attribute!(
	/// The `target` attribute
	target, "target"
);
define_attribute!(
	/// The `rel` attribute
	rel, "rel"
);
define_attribute!(
	/// The `src` attribute
	src, "src"
);
define_attribute!(
	/// The `alt` attribute
	alt, "alt"
);
define_attribute!(
	/// The `width` attribute
	width, "width"
);
define_attribute!(
	/// The `height` attribute
	height, "height"
);

// ============================================================================
// Forms
// ============================================================================

define_attribute!(
	/// The `type` attribute
	r#type, "type"
);
define_attribute!(
	/// The `name` attribute
	name, "name"
);
define_attribute!(
	/// The `value` attribute
	value, "value"
);
define_attribute!(
	/// The `for` attribute of `<label>`
	r#for, "for"
);
define_attribute!(
	/// The `placeholder` attribute
	placeholder, "placeholder"
);
define_attribute!(
	/// The `action` attribute of `<form>`
	action, "action"
);
define_attribute!(
	/// The `method` attribute of `<form>`
	method, "method"
);
define_attribute!(
	/// The `autocomplete` attribute
	autocomplete, "autocomplete"
);
define_attribute!(
	/// The `rows` attribute of `<textarea>`
	rows, "rows"
);
define_attribute!(
	/// The `min` attribute
	min, "min"
);
define_attribute!(
	/// The `max` attribute
	max, "max"
);

define_flag!(
	/// The bare `checked` attribute
	checked, "checked"
);
define_flag!(
	/// The bare `disabled` attribute
	disabled, "disabled"
);
define_flag!(
	/// The bare `required` attribute
	required, "required"
);
define_flag!(
	/// The bare `readonly` attribute
	read_only, "readonly"
);
define_flag!(
	/// The bare `hidden` attribute
	hidden, "hidden"
);
define_flag!(
	/// The bare `selected` attribute
	selected, "selected"
);
define_flag!(
	/// The bare `multiple` attribute
	multiple, "multiple"
);
define_flag!(
	/// The bare `autofocus` attribute
	autofocus, "autofocus"
);

// ============================================================================
// SVG presentation
// ============================================================================

define_attribute!(
	/// The `xmlns` attribute
	xmlns, "xmlns"
);
define_attribute!(
	/// The `viewBox` attribute (case preserved)
	view_box, "viewBox"
);
define_attribute!(
	/// The `fill` attribute
	fill, "fill"
);
define_attribute!(
	/// The `stroke` attribute
	stroke, "stroke"
);
define_attribute!(
	/// The `stroke-width` attribute
	stroke_width, "stroke-width"
);
define_attribute!(
	/// The `stroke-linecap` attribute
	stroke_linecap, "stroke-linecap"
);
define_attribute!(
	/// The `stroke-linejoin` attribute
	stroke_linejoin, "stroke-linejoin"
);
define_attribute!(
	/// The `d` attribute of `<path>`
	d, "d"
);
define_attribute!(
	/// The `cx` attribute
	cx, "cx"
);
define_attribute!(
	/// The `cy` attribute
	cy, "cy"
);
define_attribute!(
	/// The `r` attribute
	r, "r"
);
define_attribute!(
	/// The `points` attribute of `<polyline>` / `<polygon>`
	points, "points"
);

/// An `aria-*` attribute. `aria("checked", "true")` renders `aria-checked="true"`.
pub fn aria(suffix: &str, value: impl Into<Cow<'static, str>>) -> Node {
	attr(format!("aria-{suffix}"), value)
}

/// A `data-*` attribute. `data("state", "on")` renders `data-state="on"`.
pub fn data(suffix: &str, value: impl Into<Cow<'static, str>>) -> Node {
	attr(format!("data-{suffix}"), value)
}

/// `data-slot`, the part name shadcn-style components carry on every root.
pub fn data_slot(slot: &'static str) -> Node {
	attr("data-slot", slot)
}

/// A boolean rendered as the strings `"true"` / `"false"`, as ARIA expects.
pub fn aria_bool(suffix: &str, value: bool) -> Node {
	aria(suffix, if value { "true" } else { "false" })
}

/// Adds the bare attribute `name` only when `on` holds.
pub fn flag(name: &'static str, on: bool) -> Node {
	if on { attr_valueless(name) } else { Node::Empty }
}
