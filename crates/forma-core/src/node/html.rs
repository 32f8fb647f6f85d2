//! Element helpers.
//!
//! Every helper takes the element's children (attributes included) as one
//! argument. Pass a tuple to mix types:
//!
//! ```
//! use forma_core::node::attributes::{class, href};
//! use forma_core::node::html::{a, li, ul};
//!
//! let nav = ul((class("menu"), li(a((href("/"), "Home")))));
//! assert_eq!(
//! 	nav.render_to_string(),
//! 	r#"<ul class="menu"><li><a href="/">Home</a></li></ul>"#
//! );
//! ```

use super::{IntoChildren, Node, element};

macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name(children: impl IntoChildren) -> Node {
			element($tag, children)
		}
	};
}

// ============================================================================
// Sectioning and grouping
// ============================================================================

define_element!(
	/// Create a `<div>` element
	div, "div"
);
define_element!(
	/// Create a `<span>` element
	span, "span"
);
define_element!(
	/// Create a `<p>` element
	p, "p"
);
define_element!(
	/// Create a `<section>` element
	section, "section"
);
define_element!(
	/// Create a `<header>` element
	header, "header"
);
define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);
define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);
define_element!(
	/// Create a `<h1>` element
	h1, "h1"
);
define_element!(
	/// Create a `<h2>` element
	h2, "h2"
);
define_element!(
	/// Create a `<h3>` element
	h3, "h3"
);
define_element!(
	/// Create a `<h4>` element
	h4, "h4"
);
define_element!(
	/// Create a `<h5>` element
	h5, "h5"
);
define_element!(
	/// Create a `<ul>` element
	ul, "ul"
);
define_element!(
	/// Create an `<ol>` element
	ol, "ol"
);
define_element!(
	/// Create a `<li>` element
	li, "li"
);
define_element!(
	/// Create an `<hr>` element (void)
	hr, "hr"
);

// ============================================================================
// Inline text
// ============================================================================

define_element!(
	/// Create an `<a>` element
	a, "a"
);
define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);
define_element!(
	/// Create an `<em>` element
	em, "em"
);
define_element!(
	/// Create a `<small>` element
	small, "small"
);
define_element!(
	/// Create a `<code>` element
	code, "code"
);
define_element!(
	/// Create a `<br>` element (void)
	br, "br"
);

// ============================================================================
// Forms
// ============================================================================

define_element!(
	/// Create a `<form>` element
	form, "form"
);
define_element!(
	/// Create a `<button>` element
	button, "button"
);
define_element!(
	/// Create an `<input>` element (void)
	input, "input"
);
define_element!(
	/// Create a `<label>` element
	label, "label"
);
define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);
define_element!(
	/// Create a `<select>` element
	select, "select"
);
define_element!(
	/// Create an `<option>` element
	option, "option"
);
define_element!(
	/// Create a `<fieldset>` element
	fieldset, "fieldset"
);

// ============================================================================
// Tables
// ============================================================================

define_element!(
	/// Create a `<table>` element
	table, "table"
);
define_element!(
	/// Create a `<thead>` element
	thead, "thead"
);
define_element!(
	/// Create a `<tbody>` element
	tbody, "tbody"
);
define_element!(
	/// Create a `<tr>` element
	tr, "tr"
);
define_element!(
	/// Create a `<th>` element
	th, "th"
);
define_element!(
	/// Create a `<td>` element
	td, "td"
);

// ============================================================================
// Media and scripting
// ============================================================================

define_element!(
	/// Create an `<img>` element (void)
	img, "img"
);
define_element!(
	/// Create a `<script>` element. Pass the body as
	/// [`unsafe_raw`](super::unsafe_raw); text children are escaped.
	script, "script"
);

// ============================================================================
// Inline SVG
// ============================================================================

define_element!(
	/// Create an `<svg>` element
	svg, "svg"
);
define_element!(
	/// Create a `<g>` element
	g, "g"
);
define_element!(
	/// Create a `<path>` element (void)
	path, "path"
);
define_element!(
	/// Create a `<circle>` element (void)
	circle, "circle"
);
define_element!(
	/// Create a `<line>` element (void)
	line, "line"
);
define_element!(
	/// Create a `<polyline>` element (void)
	polyline, "polyline"
);
define_element!(
	/// Create a `<polygon>` element (void)
	polygon, "polygon"
);
define_element!(
	/// Create a `<rect>` element (void)
	rect, "rect"
);
define_element!(
	/// Create an `<ellipse>` element (void)
	ellipse, "ellipse"
);
