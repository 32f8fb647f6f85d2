//! Toggle button

use forma_core::prelude::*;
use forma_core::variant::{SIZE, VARIANT};

use crate::component::{compose, key_enum, pressed_attributes};

key_enum! {
	/// Visual style of a toggle
	ToggleVariant {
		#[default]
		Default => "default",
		Outline => "outline",
	}
}

key_enum! {
	/// Size preset of a toggle
	ToggleSize {
		#[default]
		Default => "default",
		Sm => "sm",
		Lg => "lg",
	}
}

const BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium hover:bg-muted hover:text-muted-foreground disabled:pointer-events-none disabled:opacity-50 data-[state=on]:bg-accent data-[state=on]:text-accent-foreground [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 [&_svg]:shrink-0 focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] outline-none transition-[color,box-shadow] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive whitespace-nowrap";

/// Class table for toggles
pub fn toggle_variants() -> VariantConfig {
	VariantConfig::new(BASE)
		.variant(VARIANT, "default", "bg-transparent")
		.variant(
			VARIANT,
			"outline",
			"border border-input bg-transparent shadow-xs hover:bg-accent hover:text-accent-foreground",
		)
		.variant(SIZE, "default", "h-9 px-2 min-w-9")
		.variant(SIZE, "sm", "h-8 px-1.5 min-w-8")
		.variant(SIZE, "lg", "h-10 px-2.5 min-w-10")
		.default_value(VARIANT, ToggleVariant::Default.as_str())
		.default_value(SIZE, ToggleSize::Default.as_str())
}

/// Toggle classes
pub fn toggle_class(variant: ToggleVariant, size: ToggleSize, class_name: &str) -> String {
	toggle_variants().resolve(
		&VariantProps::new()
			.variant(variant.as_str())
			.size(size.as_str())
			.class(class_name),
	)
}

/// Toggle properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleProps {
	/// Visual style
	pub variant: ToggleVariant,
	/// Size preset
	pub size: ToggleSize,
	/// Pressed state
	pub pressed: bool,
	/// Disabled state
	pub disabled: bool,
	/// Accessible name, for icon-only toggles
	pub aria_label: Option<String>,
	/// Extra classes
	pub class: String,
}

impl ToggleProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
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

	/// Set the pressed state
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

/// Renders a two-state button with `aria-pressed` and `data-state="on|off"`
pub fn toggle(props: ToggleProps, children: impl IntoChildren) -> Node {
	compose(
		"button",
		(
			r#type("button"),
			data_slot("toggle"),
			pressed_attributes(props.pressed),
			when(props.disabled, data("disabled", "")),
			flag("disabled", props.disabled),
			props.aria_label.map(|label| aria("label", label)),
			class(toggle_class(props.variant, props.size, &props.class)),
		),
		children,
	)
}
