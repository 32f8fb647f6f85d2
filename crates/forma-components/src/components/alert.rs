//! Alert
//!
//! A callout with an optional leading icon, a title and a description.

use forma_core::prelude::*;
use forma_core::variant::VARIANT;

use crate::component::{compose, key_enum};

key_enum! {
	/// Visual style of an alert
	AlertVariant {
		#[default]
		Default => "default",
		Destructive => "destructive",
	}
}

const BASE: &str = "relative w-full rounded-lg border px-4 py-3 text-sm grid has-[>svg]:grid-cols-[calc(var(--spacing)*4)_1fr] grid-cols-[0_1fr] has-[>svg]:gap-x-3 gap-y-0.5 items-start [&>svg]:size-4 [&>svg]:translate-y-0.5 [&>svg]:text-current";

/// Class table for alerts
pub fn alert_variants() -> VariantConfig {
	VariantConfig::new(BASE)
		.variant(VARIANT, "default", "bg-card text-card-foreground")
		.variant(
			VARIANT,
			"destructive",
			"text-destructive bg-card [&>svg]:text-current *:data-[slot=alert-description]:text-destructive/90",
		)
		.default_value(VARIANT, AlertVariant::Default.as_str())
}

/// Alert properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertProps {
	/// Visual style
	pub variant: AlertVariant,
	/// Extra classes
	pub class: String,
	/// Leading icon, rendered before the children
	pub icon: Option<Node>,
}

impl AlertProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the visual style
	pub fn variant(mut self, variant: AlertVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Set the leading icon
	pub fn icon(mut self, icon: Node) -> Self {
		self.icon = Some(icon);
		self
	}
}

/// Renders an alert
pub fn alert(props: AlertProps, children: impl IntoChildren) -> Node {
	let classes = alert_variants().resolve(
		&VariantProps::new()
			.variant(props.variant.as_str())
			.class(props.class),
	);
	compose(
		"div",
		(
			data_slot("alert"),
			role("alert"),
			data("variant", props.variant.as_str()),
			class(classes),
			props.icon,
		),
		children,
	)
}

/// Alert heading
pub fn alert_title(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			data_slot("alert-title"),
			class(cn!("col-start-2 line-clamp-1 min-h-4 font-medium tracking-tight", class_name)),
		),
		children,
	)
}

/// Alert body text
pub fn alert_description(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			data_slot("alert-description"),
			class(cn!(
				"text-muted-foreground col-start-2 grid justify-items-start gap-1 text-sm [&_p]:leading-relaxed",
				class_name
			)),
		),
		children,
	)
}
