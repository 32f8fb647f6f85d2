//! Checkbox
//!
//! A `<button role="checkbox">` carrying `aria-checked` and `data-state`.
//! When the checkbox has a `name`, a hidden native checkbox follows it so the
//! value is submitted with the form.

use forma_core::prelude::*;

use crate::component::{CheckedState, bubble_input, compose};
use crate::icons;

const BASE: &str = "peer border-input dark:bg-input/30 data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground dark:data-[state=checked]:bg-primary data-[state=checked]:border-primary focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive size-4 shrink-0 rounded-[4px] border shadow-xs transition-shadow outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50";

/// Checkbox properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxProps {
	/// Checked state
	pub checked: bool,
	/// Shows the mixed state; takes precedence over `checked`
	pub indeterminate: bool,
	/// Disabled state
	pub disabled: bool,
	/// Required field
	pub required: bool,
	/// Element id
	pub id: Option<String>,
	/// Form field name; adds the hidden native input
	pub name: Option<String>,
	/// Submitted value
	pub value: String,
	/// Extra classes
	pub class: String,
}

impl Default for CheckboxProps {
	fn default() -> Self {
		Self {
			checked: false,
			indeterminate: false,
			disabled: false,
			required: false,
			id: None,
			name: None,
			value: "on".into(),
			class: String::new(),
		}
	}
}

impl CheckboxProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the checked state
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Show the mixed state
	pub fn indeterminate(mut self, indeterminate: bool) -> Self {
		self.indeterminate = indeterminate;
		self
	}

	/// Set the disabled state
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Mark the field required
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Set the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Set the form field name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Set the submitted value (default `"on"`)
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Effective state
	pub fn state(&self) -> CheckedState {
		if self.indeterminate {
			CheckedState::Indeterminate
		} else {
			CheckedState::from(self.checked)
		}
	}
}

/// Renders a checkbox. `children` go inside the button after the indicator.
pub fn checkbox(props: CheckboxProps, children: impl IntoChildren) -> Node {
	let state = props.state();
	let indicator = match state {
		CheckedState::Checked => Some(icons::check("size-3.5")),
		CheckedState::Indeterminate => Some(icons::minus("size-3.5")),
		CheckedState::Unchecked => None,
	}
	.map(|icon| {
		span((
			data_slot("checkbox-indicator"),
			data("state", state.data_state()),
			class("flex items-center justify-center text-current transition-none"),
			icon,
		))
	});

	let control = compose(
		"button",
		(
			r#type("button"),
			role("checkbox"),
			data_slot("checkbox"),
			state.attributes(),
			when(props.required, aria("required", "true")),
			when(props.disabled, data("disabled", "")),
			flag("disabled", props.disabled),
			class(cn!(BASE, props.class)),
			props.id.map(id),
			props.name.is_some().then(|| value(props.value.clone())),
			indicator,
		),
		children,
	);

	match props.name {
		Some(field) => group((
			control,
			bubble_input("checkbox", &field, &props.value, state.is_checked()),
		)),
		None => control,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unchecked_checkbox() {
		let html = checkbox(CheckboxProps::new().id("terms"), ()).render_to_string();
		assert!(html.starts_with(
			r#"<button type="button" role="checkbox" data-slot="checkbox" aria-checked="false" data-state="unchecked" class="peer "#
		));
		assert!(html.ends_with(r#" id="terms"></button>"#));
		assert!(!html.contains("<svg"));
	}

	#[rstest]
	fn test_checked_checkbox_shows_indicator() {
		let html = checkbox(CheckboxProps::new().checked(true), ()).render_to_string();
		assert!(html.contains(r#"aria-checked="true" data-state="checked""#));
		assert!(html.contains(
			r#"<span data-slot="checkbox-indicator" data-state="checked" class="flex items-center justify-center text-current transition-none"><svg "#
		));
		assert!(html.contains("lucide-check size-3.5"));
	}

	#[rstest]
	fn test_indeterminate_wins_over_checked() {
		let props = CheckboxProps::new().checked(true).indeterminate(true);
		assert_eq!(props.state(), CheckedState::Indeterminate);
		let html = checkbox(props, ()).render_to_string();
		assert!(html.contains(r#"aria-checked="mixed" data-state="indeterminate""#));
		assert!(html.contains("lucide-minus"));
	}

	#[rstest]
	fn test_disabled_and_required() {
		let html = checkbox(CheckboxProps::new().disabled(true).required(true), ()).render_to_string();
		assert!(html.contains(r#" aria-required="true" data-disabled="" disabled class="#));
	}

	#[rstest]
	fn test_named_checkbox_adds_hidden_input() {
		let node = checkbox(CheckboxProps::new().name("newsletter").value("yes").checked(true), ());
		assert!(matches!(node, Node::Group(_)));
		let html = node.render_to_string();
		let button_end = html.find("</button>").unwrap();
		let hidden = &html[button_end..];
		assert!(hidden.starts_with(
			r#"</button><input type="checkbox" aria-hidden="true" tabindex="-1" name="newsletter" value="yes" checked style=""#
		));
		assert!(html[..button_end].contains(r#" value="yes""#));
	}
}
