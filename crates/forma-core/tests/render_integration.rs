//! Rendering integration tests
//!
//! Test Categories:
//! 1. Literal scenarios - fixed input, fixed output
//! 2. Attribute partitioning - attributes mixed with children and groups
//! 3. Properties - escaping, raw passthrough, attribute order
//! 4. Concurrency - disjoint trees rendered from several threads

use forma_core::prelude::*;
use forma_core::{DuplicateAttributes, RenderError, VoidStyle};
use proptest::prelude::*;
use rstest::*;

// ============================================================================
// Literal scenarios
// ============================================================================

#[rstest]
fn test_cn_scenarios() {
	assert_eq!(cn(["foo", "bar", "foo"]), "foo bar");
	assert_eq!(cn(["foo bar", "", "baz"]), "foo bar baz");
	assert_eq!(cn_if(true, "active", "inactive"), "active");
	assert_eq!(cn_if(false, "active", "inactive"), "inactive");
}

#[rstest]
#[case(element("div", (attr("class", "x"), text("hi"))), r#"<div class="x">hi</div>"#)]
#[case(element("input", (attr("type", "text"), attr_valueless("disabled"))), r#"<input type="text" disabled>"#)]
#[case(element("p", text("a & b <c>")), "<p>a &amp; b &lt;c&gt;</p>")]
#[case(element("p", text(r#"it's "x""#)), "<p>it&#x27;s &quot;x&quot;</p>")]
#[case(element("DIV", ()), "<div></div>")]
#[case(group(("a", "b")), "ab")]
#[case(empty(), "")]
fn test_render_scenarios(#[case] node: Node, #[case] expected: &str) {
	assert_eq!(node.render_to_string(), expected);
}

#[rstest]
fn test_resolve_scenarios() {
	let with_default = VariantConfig::new("a")
		.variant("variant", "x", "b")
		.default_value("variant", "x");
	assert_eq!(with_default.resolve(&VariantProps::new()), "a b");

	let without_default = VariantConfig::new("a").variant("variant", "x", "b");
	assert_eq!(
		without_default.resolve(&VariantProps::new().variant("x").class("c")),
		"a b c"
	);
}

// ============================================================================
// Attribute partitioning
// ============================================================================

#[rstest]
fn test_inline_svg_keeps_attribute_case() {
	let icon = svg((
		xmlns("http://www.w3.org/2000/svg"),
		view_box("0 0 24 24"),
		attr("preserveAspectRatio", "none"),
		path(d("M20 6 9 17l-5-5")),
	));
	assert_eq!(
		icon.render_to_string(),
		r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" preserveAspectRatio="none"><path d="M20 6 9 17l-5-5"></svg>"#
	);
}

#[rstest]
fn test_inline_svg_self_closing() {
	let renderer = HtmlRenderer::with_options(RenderOptions {
		void_style: VoidStyle::SelfClosing,
		duplicate_attributes: DuplicateAttributes::EmitAll,
	});
	let icon = svg((view_box("0 0 24 24"), circle((cx("12"), cy("12"), r("10")))));
	assert_eq!(
		renderer.render_to_string(&icon),
		r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" /></svg>"#
	);
}

#[rstest]
fn test_reusable_attribute_group() {
	let field_attrs = || group((r#type("email"), name("email"), required()));
	let form_node = form((
		input((field_attrs(), id("a"))),
		input((id("b"), field_attrs())),
	));
	assert_eq!(
		form_node.render_to_string(),
		r#"<form><input type="email" name="email" required id="a"><input id="b" type="email" name="email" required></form>"#
	);
}

#[rstest]
fn test_script_body_via_raw() {
	let node = script(unsafe_raw("if (a < b && c) { run(); }"));
	assert_eq!(
		node.render_to_string(),
		"<script>if (a < b && c) { run(); }</script>"
	);
}

#[rstest]
fn test_escaped_text_inside_script_is_still_escaped() {
	let node = script("a < b");
	assert_eq!(node.render_to_string(), "<script>a &lt; b</script>");
}

#[rstest]
fn test_large_tree_renders_in_order() {
	let items: Vec<Node> = (0..200).map(|i| li(format!("item {i}"))).collect();
	let html = ul((class("list"), items)).render_to_string();
	assert!(html.starts_with(r#"<ul class="list"><li>item 0</li><li>item 1</li>"#));
	assert!(html.ends_with("<li>item 199</li></ul>"));
	assert_eq!(html.matches("<li>").count(), 200);
}

#[rstest]
fn test_deep_nesting() {
	let mut node = span("core");
	for _ in 0..64 {
		node = div(node);
	}
	let html = node.render_to_string();
	assert_eq!(html.matches("<div>").count(), 64);
	assert!(html.contains("<span>core</span>"));
}

// ============================================================================
// Writer failure
// ============================================================================

struct ClosedSink;

impl std::io::Write for ClosedSink {
	fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
		Err(std::io::Error::other("closed"))
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

#[rstest]
fn test_writer_failure_is_returned() {
	let err = div("x").render(&mut ClosedSink).unwrap_err();
	assert!(matches!(err, RenderError::Writer(_)));
	assert!(err.to_string().contains("closed"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[rstest]
fn test_disjoint_trees_render_concurrently() {
	let handles: Vec<_> = (0..8)
		.map(|i| {
			std::thread::spawn(move || {
				let node = div((class(format!("t{i}")), p(format!("thread {i}"))));
				node.render_to_string()
			})
		})
		.collect();
	for (i, handle) in handles.into_iter().enumerate() {
		let html = handle.join().unwrap();
		assert_eq!(html, format!(r#"<div class="t{i}"><p>thread {i}</p></div>"#));
	}
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#[test]
	fn prop_plain_text_is_unchanged(s in "[^&<>\"']*") {
		prop_assert_eq!(text(s.clone()).render_to_string(), s);
	}

	#[test]
	fn prop_text_has_no_raw_markup(s in any::<String>()) {
		let html = text(s).render_to_string();
		prop_assert!(!html.contains('<'));
		prop_assert!(!html.contains('>'));
		prop_assert!(!html.contains('"'));
		prop_assert!(!html.contains('\''));
		for (idx, _) in html.match_indices('&') {
			let rest = &html[idx..];
			prop_assert!(
				["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"]
					.iter()
					.any(|entity| rest.starts_with(*entity))
			);
		}
	}

	#[test]
	fn prop_raw_is_verbatim(s in any::<String>()) {
		prop_assert_eq!(unsafe_raw(s.clone()).render_to_string(), s);
	}

	#[test]
	fn prop_attributes_and_children_keep_order(
		names in prop::collection::vec("[a-z]{1,8}", 0..6),
		children in prop::collection::vec("[a-z ]{0,8}", 0..6),
	) {
		let attrs: Vec<Node> = names
			.iter()
			.enumerate()
			.map(|(i, n)| attr(format!("data-{n}"), i.to_string()))
			.collect();
		let kids: Vec<Node> = children.iter().map(|c| span(c.clone())).collect();
		let html = div((attrs, kids)).render_to_string();

		let open_end = html.find('>').unwrap();
		let open_tag = &html[..open_end];
		let mut cursor = 0;
		for (i, n) in names.iter().enumerate() {
			let needle = format!(r#" data-{n}="{i}""#);
			let found = open_tag[cursor..].find(&needle);
			prop_assert!(found.is_some());
			cursor += found.unwrap() + needle.len();
		}

		let mut cursor = open_end;
		for c in &children {
			let needle = format!("<span>{c}</span>");
			let found = html[cursor..].find(&needle);
			prop_assert!(found.is_some());
			cursor += found.unwrap() + needle.len();
		}
	}
}
