//! Separator

use forma_core::prelude::*;

use crate::component::{Orientation, compose};

const BASE: &str = "bg-border shrink-0 data-[orientation=horizontal]:h-px data-[orientation=horizontal]:w-full data-[orientation=vertical]:h-full data-[orientation=vertical]:w-px";

/// Separator properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorProps {
	/// Layout direction
	pub orientation: Orientation,
	/// Purely visual separators are hidden from assistive technology
	pub decorative: bool,
	/// Extra classes
	pub class: String,
}

impl Default for SeparatorProps {
	fn default() -> Self {
		Self {
			orientation: Orientation::Horizontal,
			decorative: true,
			class: String::new(),
		}
	}
}

impl SeparatorProps {
	/// Create default properties (horizontal, decorative)
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the layout direction
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	/// Set whether the separator is purely visual
	pub fn decorative(mut self, decorative: bool) -> Self {
		self.decorative = decorative;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders a separator line
pub fn separator(props: SeparatorProps, children: impl IntoChildren) -> Node {
	let semantics = if props.decorative {
		role("none")
	} else {
		group((
			role("separator"),
			aria("orientation", props.orientation.as_str()),
		))
	};
	compose(
		"div",
		(
			data_slot("separator"),
			semantics,
			data("orientation", props.orientation.as_str()),
			class(cn!(BASE, props.class)),
		),
		children,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use insta::assert_snapshot;
	use rstest::rstest;

	#[rstest]
	fn test_decorative_separator() {
		assert_snapshot!(
			separator(SeparatorProps::new(), ()).render_to_string(),
			@r#"<div data-slot="separator" role="none" data-orientation="horizontal" class="bg-border shrink-0 data-[orientation=horizontal]:h-px data-[orientation=horizontal]:w-full data-[orientation=vertical]:h-full data-[orientation=vertical]:w-px"></div>"#
		);
	}

	#[rstest]
	fn test_semantic_vertical_separator() {
		let html = separator(
			SeparatorProps::new()
				.orientation(Orientation::Vertical)
				.decorative(false)
				.class("mx-2"),
			(),
		)
		.render_to_string();
		assert!(html.starts_with(
			r#"<div data-slot="separator" role="separator" aria-orientation="vertical" data-orientation="vertical" class="#
		));
		assert!(html.ends_with(r#" mx-2"></div>"#));
	}
}
