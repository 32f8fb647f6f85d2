//! Label

use forma_core::prelude::*;

use crate::component::compose;

pub(crate) const LABEL_BASE: &str = "flex items-center gap-2 text-sm leading-none font-medium select-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50";

/// Label properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelProps {
	/// Id of the labelled control (`for`)
	pub html_for: Option<String>,
	/// Extra classes
	pub class: String,
}

impl LabelProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the labelled control's id
	pub fn html_for(mut self, target: impl Into<String>) -> Self {
		self.html_for = Some(target.into());
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders a `<label>`
pub fn label(props: LabelProps, children: impl IntoChildren) -> Node {
	compose(
		"label",
		(
			data_slot("label"),
			class(cn!(LABEL_BASE, props.class)),
			props.html_for.map(r#for),
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
	fn test_label_snapshot() {
		assert_snapshot!(
			label(LabelProps::new().html_for("email"), "Email").render_to_string(),
			@r#"<label data-slot="label" class="flex items-center gap-2 text-sm leading-none font-medium select-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50" for="email">Email</label>"#
		);
	}

	#[rstest]
	fn test_label_without_target() {
		let html = label(LabelProps::new().class("sr-only"), "Search").render_to_string();
		assert!(!html.contains(" for="));
		assert!(html.contains(r#"peer-disabled:opacity-50 sr-only">Search</label>"#));
	}
}
