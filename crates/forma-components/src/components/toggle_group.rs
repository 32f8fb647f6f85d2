//! Toggle group
//!
//! In `single` mode the items behave as radios (`role="radio"`,
//! `aria-checked`); in `multiple` mode each item is an independent toggle
//! (`aria-pressed`). Both modes set `data-state="on|off"`.

use forma_core::prelude::*;

use crate::component::{Orientation, compose, data_state_on, key_enum, pressed_attributes};
use crate::components::toggle::{ToggleSize, ToggleVariant, toggle_class};

key_enum! {
	/// Selection mode of a toggle group
	ToggleGroupType {
		#[default]
		Single => "single",
		Multiple => "multiple",
	}
}

const ITEM_EXTRA: &str = "min-w-0 flex-1 shrink-0 rounded-none shadow-none first:rounded-l-md last:rounded-r-md focus:z-10 focus-visible:z-10 data-[variant=outline]:border-l-0 data-[variant=outline]:first:border-l";

/// Toggle group properties, shared with its items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleGroupProps {
	/// Selection mode
	pub group_type: ToggleGroupType,
	/// Visual style of every item
	pub variant: ToggleVariant,
	/// Size preset of every item
	pub size: ToggleSize,
	/// Layout direction
	pub orientation: Orientation,
	/// Disables every item
	pub disabled: bool,
	/// Extra classes
	pub class: String,
}

impl ToggleGroupProps {
	/// Create properties for the given mode
	pub fn new(group_type: ToggleGroupType) -> Self {
		Self {
			group_type,
			..Self::default()
		}
	}

	/// Set the visual style
	pub fn variant(mut self, variant: ToggleVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Set the size preset
	pub fn size(mut self, size: ToggleSize) -> Self {
		self.size = size;
		self
	}

	/// Set the layout direction
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	/// Disable every item
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

/// Renders the group container
pub fn toggle_group(props: &ToggleGroupProps, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			role("group"),
			data_slot("toggle-group"),
			data("type", props.group_type.as_str()),
			data("variant", props.variant.as_str()),
			data("size", props.size.as_str()),
			data("orientation", props.orientation.as_str()),
			when(props.disabled, data("disabled", "")),
			class(cn!(
				"group/toggle-group flex w-fit items-center rounded-md data-[variant=outline]:shadow-xs",
				props.class
			)),
		),
		children,
	)
}

/// Toggle group item properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleGroupItemProps {
	/// Value the item stands for
	pub value: String,
	/// On state
	pub pressed: bool,
	/// Disabled state
	pub disabled: bool,
	/// Accessible name, for icon-only items
	pub aria_label: Option<String>,
	/// Extra classes
	pub class: String,
}

impl ToggleGroupItemProps {
	/// Create properties for an item standing for `value`
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	/// Set the on state
	pub fn pressed(mut self, pressed: bool) -> Self {
		self.pressed = pressed;
		self
	}

	/// Set the disabled state
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Set the accessible name
	pub fn aria_label(mut self, label: impl Into<String>) -> Self {
		self.aria_label = Some(label.into());
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders one item. Mode, variant and size come from the group.
pub fn toggle_group_item(
	group_props: &ToggleGroupProps,
	props: ToggleGroupItemProps,
	children: impl IntoChildren,
) -> Node {
	let state = match group_props.group_type {
		ToggleGroupType::Single => group((
			role("radio"),
			aria_bool("checked", props.pressed),
			data_state_on(props.pressed),
		)),
		ToggleGroupType::Multiple => pressed_attributes(props.pressed),
	};
	let is_disabled = group_props.disabled || props.disabled;
	let classes = toggle_class(
		group_props.variant,
		group_props.size,
		&cn!(ITEM_EXTRA, props.class),
	);

	compose(
		"button",
		(
			r#type("button"),
			data_slot("toggle-group-item"),
			state,
			value(props.value),
			data("variant", group_props.variant.as_str()),
			data("size", group_props.size.as_str()),
			when(is_disabled, data("disabled", "")),
			flag("disabled", is_disabled),
			props.aria_label.map(|label| aria("label", label)),
			class(classes),
		),
		children,
	)
}
