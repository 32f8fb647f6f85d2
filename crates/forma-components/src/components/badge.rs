//! Badge

use forma_core::prelude::*;
use forma_core::variant::VARIANT;

use crate::component::{compose, key_enum};

key_enum! {
	/// Visual style of a badge
	BadgeVariant {
		#[default]
		Default => "default",
		Secondary => "secondary",
		Destructive => "destructive",
		Outline => "outline",
	}
}

const BASE: &str = "inline-flex items-center justify-center rounded-md border px-2 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 [&>svg]:size-3 gap-1 [&>svg]:pointer-events-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive transition-[color,box-shadow] overflow-hidden";

/// Class table for badges
pub fn badge_variants() -> VariantConfig {
	VariantConfig::new(BASE)
		.variant(
			VARIANT,
			"default",
			"border-transparent bg-primary text-primary-foreground [a&]:hover:bg-primary/90",
		)
		.variant(
			VARIANT,
			"secondary",
			"border-transparent bg-secondary text-secondary-foreground [a&]:hover:bg-secondary/90",
		)
		.variant(
			VARIANT,
			"destructive",
			"border-transparent bg-destructive text-white [a&]:hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60",
		)
		.variant(
			VARIANT,
			"outline",
			"text-foreground [a&]:hover:bg-accent [a&]:hover:text-accent-foreground",
		)
		.default_value(VARIANT, BadgeVariant::Default.as_str())
}

/// Badge classes
pub fn badge_class(variant: BadgeVariant, class_name: &str) -> String {
	badge_variants().resolve(&VariantProps::new().variant(variant.as_str()).class(class_name))
}

/// Badge properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProps {
	/// Visual style
	pub variant: BadgeVariant,
	/// Extra classes
	pub class: String,
	/// Renders an `<a>` when set
	pub href: Option<String>,
}

impl BadgeProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the visual style
	pub fn variant(mut self, variant: BadgeVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Render as a link
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}
}

/// Renders a badge
pub fn badge(props: BadgeProps, children: impl IntoChildren) -> Node {
	let own = (
		data_slot("badge"),
		data("variant", props.variant.as_str()),
		class(badge_class(props.variant, &props.class)),
	);
	match props.href {
		Some(url) => compose("a", (own, href(url)), children),
		None => compose("span", own, children),
	}
}
