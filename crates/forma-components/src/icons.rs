//! Inline SVG icons (lucide outlines)
//!
//! Icons are decorative: every one carries `aria-hidden="true"`. Pass extra
//! classes (usually a `size-*` utility) through `class_name`.

use forma_core::prelude::*;

fn icon(slug: &'static str, class_name: &str, shapes: impl IntoChildren) -> Node {
	svg((
		xmlns("http://www.w3.org/2000/svg"),
		width("24"),
		height("24"),
		view_box("0 0 24 24"),
		fill("none"),
		stroke("currentColor"),
		stroke_width("2"),
		stroke_linecap("round"),
		stroke_linejoin("round"),
		class(cn!("lucide", slug, class_name)),
		aria("hidden", "true"),
		group(shapes),
	))
}

/// Check mark
pub fn check(class_name: &str) -> Node {
	icon("lucide-check", class_name, path(d("M20 6 9 17l-5-5")))
}

/// Horizontal bar, used for indeterminate checkboxes
pub fn minus(class_name: &str) -> Node {
	icon("lucide-minus", class_name, path(d("M5 12h14")))
}

/// Cross
pub fn x(class_name: &str) -> Node {
	icon(
		"lucide-x",
		class_name,
		(path(d("M18 6 6 18")), path(d("m6 6 12 12"))),
	)
}

/// Circle outline
pub fn circle_icon(class_name: &str) -> Node {
	icon(
		"lucide-circle",
		class_name,
		circle((cx("12"), cy("12"), r("10"))),
	)
}

/// Chevron pointing left
pub fn chevron_left(class_name: &str) -> Node {
	icon("lucide-chevron-left", class_name, path(d("m15 18-6-6 6-6")))
}

/// Chevron pointing right
pub fn chevron_right(class_name: &str) -> Node {
	icon("lucide-chevron-right", class_name, path(d("m9 18 6-6-6-6")))
}

/// Chevron pointing down
pub fn chevron_down(class_name: &str) -> Node {
	icon("lucide-chevron-down", class_name, path(d("m6 9 6 6 6-6")))
}

/// Circled "i"
pub fn info(class_name: &str) -> Node {
	icon(
		"lucide-info",
		class_name,
		(
			circle((cx("12"), cy("12"), r("10"))),
			path(d("M12 16v-4")),
			path(d("M12 8h.01")),
		),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use insta::assert_snapshot;
	use rstest::rstest;

	#[rstest]
	fn test_check_icon() {
		assert_snapshot!(
			check("size-4").render_to_string(),
			@r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-check size-4" aria-hidden="true"><path d="M20 6 9 17l-5-5"></svg>"#
		);
	}

	#[rstest]
	#[case(minus(""), "lucide lucide-minus")]
	#[case(x(""), "lucide lucide-x")]
	#[case(circle_icon(""), "lucide lucide-circle")]
	#[case(chevron_left(""), "lucide lucide-chevron-left")]
	#[case(chevron_right(""), "lucide lucide-chevron-right")]
	#[case(chevron_down(""), "lucide lucide-chevron-down")]
	#[case(info(""), "lucide lucide-info")]
	fn test_icons_are_hidden_svgs(#[case] node: Node, #[case] classes: &str) {
		let html = node.render_to_string();
		assert!(html.starts_with("<svg "));
		assert!(html.ends_with("</svg>"));
		assert!(html.contains(r#"aria-hidden="true""#));
		assert!(html.contains(&format!(r#"class="{classes}""#)));
	}

	#[rstest]
	fn test_multi_shape_icon_keeps_order() {
		let html = info("").render_to_string();
		let circle_at = html.find("<circle").unwrap();
		let stem_at = html.find("M12 16v-4").unwrap();
		let dot_at = html.find("M12 8h.01").unwrap();
		assert!(circle_at < stem_at && stem_at < dot_at);
	}
}
