//! Switch

use forma_core::prelude::*;

use crate::component::{CheckedState, bubble_input, compose, data_state_checked};

const BASE: &str = "peer data-[state=checked]:bg-primary data-[state=unchecked]:bg-input focus-visible:border-ring focus-visible:ring-ring/50 dark:data-[state=unchecked]:bg-input/80 inline-flex h-[1.15rem] w-8 shrink-0 items-center rounded-full border border-transparent shadow-xs transition-all outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50";

const THUMB: &str = "bg-background dark:data-[state=unchecked]:bg-foreground dark:data-[state=checked]:bg-primary-foreground pointer-events-none block size-4 rounded-full ring-0 transition-transform data-[state=checked]:translate-x-[calc(100%-2px)] data-[state=unchecked]:translate-x-0";

/// Switch properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchProps {
	/// On state
	pub checked: bool,
	/// Disabled state
	pub disabled: bool,
	/// Element id
	pub id: Option<String>,
	/// Form field name; adds the hidden native input
	pub name: Option<String>,
	/// Submitted value
	pub value: String,
	/// Extra classes
	pub class: String,
}

impl Default for SwitchProps {
	fn default() -> Self {
		Self {
			checked: false,
			disabled: false,
			id: None,
			name: None,
			value: "on".into(),
			class: String::new(),
		}
	}
}

impl SwitchProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the on state
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Set the disabled state
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
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
}

/// Renders a switch: a `<button role="switch">` with its thumb.
/// `data-state` is set on both so either can be styled.
pub fn switch(props: SwitchProps, children: impl IntoChildren) -> Node {
	let state = CheckedState::from(props.checked);
	let control = compose(
		"button",
		(
			r#type("button"),
			role("switch"),
			data_slot("switch"),
			state.attributes(),
			when(props.disabled, data("disabled", "")),
			flag("disabled", props.disabled),
			class(cn!(BASE, props.class)),
			props.id.map(id),
			props.name.is_some().then(|| value(props.value.clone())),
			span((
				data_slot("switch-thumb"),
				data_state_checked(props.checked),
				class(THUMB),
			)),
		),
		children,
	);

	match props.name {
		Some(field) => group((
			control,
			bubble_input("checkbox", &field, &props.value, props.checked),
		)),
		None => control,
	}
}
