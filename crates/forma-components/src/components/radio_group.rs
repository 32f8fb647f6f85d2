//! Radio group

use forma_core::prelude::*;

use crate::component::{CheckedState, Orientation, bubble_input, compose};
use crate::icons;

const ITEM_BASE: &str = "border-input text-primary focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive dark:bg-input/30 aspect-square size-4 shrink-0 rounded-full border shadow-xs transition-[color,box-shadow] outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50";

/// Radio group properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroupProps {
	/// Layout direction; emits `aria-orientation` when set
	pub orientation: Option<Orientation>,
	/// Marks every item required
	pub required: bool,
	/// Disables the whole group
	pub disabled: bool,
	/// Extra classes
	pub class: String,
}

impl RadioGroupProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the layout direction
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = Some(orientation);
		self
	}

	/// Mark the group required
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Disable the group
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders the group container. Pass [`radio_group_item`]s as children.
pub fn radio_group(props: RadioGroupProps, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			role("radiogroup"),
			data_slot("radio-group"),
			props.orientation.map(|o| aria("orientation", o.as_str())),
			when(props.required, aria("required", "true")),
			when(props.disabled, data("disabled", "")),
			class(cn!("grid gap-3", props.class)),
		),
		children,
	)
}

/// Radio item properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroupItemProps {
	/// Value this item submits
	pub value: String,
	/// Selected state
	pub checked: bool,
	/// Disabled state
	pub disabled: bool,
	/// Element id
	pub id: Option<String>,
	/// Form field name; adds the hidden native radio
	pub name: Option<String>,
	/// Extra classes
	pub class: String,
}

impl RadioGroupItemProps {
	/// Create properties for an item submitting `value`
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	/// Set the selected state
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

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders one radio option
pub fn radio_group_item(props: RadioGroupItemProps, children: impl IntoChildren) -> Node {
	let state = CheckedState::from(props.checked);
	let indicator = props.checked.then(|| {
		span((
			data_slot("radio-group-indicator"),
			data("state", state.data_state()),
			class("relative flex items-center justify-center"),
			icons::circle_icon(
				"fill-primary absolute top-1/2 left-1/2 size-2 -translate-x-1/2 -translate-y-1/2",
			),
		))
	});

	let control = compose(
		"button",
		(
			r#type("button"),
			role("radio"),
			data_slot("radio-group-item"),
			state.attributes(),
			value(props.value.clone()),
			when(props.disabled, data("disabled", "")),
			flag("disabled", props.disabled),
			class(cn!(ITEM_BASE, props.class)),
			props.id.map(id),
			indicator,
		),
		children,
	);

	match props.name {
		Some(field) => group((
			control,
			bubble_input("radio", &field, &props.value, props.checked),
		)),
		None => control,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_group_container() {
		let html = radio_group(
			RadioGroupProps::new().orientation(Orientation::Vertical).required(true),
			(),
		)
		.render_to_string();
		assert_eq!(
			html,
			r#"<div role="radiogroup" data-slot="radio-group" aria-orientation="vertical" aria-required="true" class="grid gap-3"></div>"#
		);
	}

	#[rstest]
	fn test_orientation_omitted_by_default() {
		let html = radio_group(RadioGroupProps::new(), ()).render_to_string();
		assert!(!html.contains("aria-orientation"));
	}

	#[rstest]
	#[case(true, r#"aria-checked="true" data-state="checked" value="pro""#)]
	#[case(false, r#"aria-checked="false" data-state="unchecked" value="pro""#)]
	fn test_item_state(#[case] checked: bool, #[case] expected: &str) {
		let html = radio_group_item(RadioGroupItemProps::new("pro").checked(checked), ())
			.render_to_string();
		assert!(html.starts_with(r#"<button type="button" role="radio" data-slot="radio-group-item" "#));
		assert!(html.contains(expected));
		assert_eq!(html.contains("radio-group-indicator"), checked);
	}

	#[rstest]
	fn test_items_in_group_keep_order() {
		let html = radio_group(
			RadioGroupProps::new(),
			vec![
				radio_group_item(RadioGroupItemProps::new("free"), ()),
				radio_group_item(RadioGroupItemProps::new("pro").checked(true), ()),
			],
		)
		.render_to_string();
		let free = html.find(r#"value="free""#).unwrap();
		let pro = html.find(r#"value="pro""#).unwrap();
		assert!(free < pro);
	}

	#[rstest]
	fn test_named_item_adds_native_radio() {
		let html = radio_group_item(RadioGroupItemProps::new("pro").name("plan").checked(true), ())
			.render_to_string();
		assert!(html.contains(
			r#"</button><input type="radio" aria-hidden="true" tabindex="-1" name="plan" value="pro" checked "#
		));
	}
}
