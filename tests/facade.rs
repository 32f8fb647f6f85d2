//! The facade exposes both crates under one name

#![cfg(feature = "components")]

use forma::prelude::*;
use rstest::rstest;

#[rstest]
fn test_core_types_are_reexported() {
	let node: forma::Node = forma::core::node::html::button((class("px-4"), "Raw")).into_node();
	assert_eq!(node.render_to_string(), r#"<button class="px-4">Raw</button>"#);

	let cfg = forma::VariantConfig::new("base").variant("size", "sm", "h-8");
	assert_eq!(cfg.resolve(&forma::VariantProps::new().size("sm")), "base h-8");
}

#[rstest]
fn test_prelude_button_is_the_component() {
	let html = button(ButtonProps::new(), "Save").render_to_string();
	assert!(html.starts_with(r#"<button data-slot="button" data-variant="default" data-size="default" class=""#));
	assert!(html.ends_with(r#" type="button">Save</button>"#));
}

#[rstest]
fn test_theme_through_facade() {
	let theme = forma::Theme::default();
	assert_eq!(theme, forma::components::theme::Theme::default_theme());
}

#[rstest]
fn test_cn_macro_through_facade() {
	assert_eq!(forma::cn!("a b", "b c"), "a b c");
}
