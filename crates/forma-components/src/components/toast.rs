//! Toast notifications
//!
//! The markup is static: timers and swipe handling belong to client script,
//! which can read `data-duration` and flip `data-state` to `closed`.

use forma_core::prelude::*;
use forma_core::variant::VARIANT;

use crate::component::{compose, key_enum};
use crate::icons;

key_enum! {
	/// Visual style of a toast
	ToastVariant {
		#[default]
		Default => "default",
		Destructive => "destructive",
	}
}

/// Milliseconds a toast stays open unless told otherwise
pub const DEFAULT_DURATION_MS: u32 = 5000;

const BASE: &str = "group pointer-events-auto relative flex w-full items-center justify-between gap-4 overflow-hidden rounded-md border p-6 pr-8 shadow-lg transition-all data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-80 data-[state=closed]:slide-out-to-right-full data-[state=open]:slide-in-from-top-full data-[state=open]:sm:slide-in-from-bottom-full";

const VIEWPORT: &str = "fixed top-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 sm:top-auto sm:right-0 sm:bottom-0 sm:flex-col md:max-w-[420px]";

/// Class table for toasts
pub fn toast_variants() -> VariantConfig {
	VariantConfig::new(BASE)
		.variant(VARIANT, "default", "border bg-background text-foreground")
		.variant(
			VARIANT,
			"destructive",
			"destructive group border-destructive bg-destructive text-destructive-foreground",
		)
		.default_value(VARIANT, ToastVariant::Default.as_str())
}

/// Toast properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastProps {
	/// Visual style
	pub variant: ToastVariant,
	/// Auto-dismiss delay in milliseconds
	pub duration_ms: u32,
	/// Extra classes
	pub class: String,
}

impl Default for ToastProps {
	fn default() -> Self {
		Self {
			variant: ToastVariant::Default,
			duration_ms: DEFAULT_DURATION_MS,
			class: String::new(),
		}
	}
}

impl ToastProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the visual style
	pub fn variant(mut self, variant: ToastVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Set the auto-dismiss delay
	pub fn duration_ms(mut self, duration_ms: u32) -> Self {
		self.duration_ms = duration_ms;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Renders one toast as a list item of the [`toaster`] viewport.
///
/// Destructive toasts are announced assertively.
pub fn toast(props: ToastProps, children: impl IntoChildren) -> Node {
	let live = match props.variant {
		ToastVariant::Default => "polite",
		ToastVariant::Destructive => "assertive",
	};
	let classes = toast_variants().resolve(
		&VariantProps::new()
			.variant(props.variant.as_str())
			.class(props.class),
	);
	compose(
		"li",
		(
			role("status"),
			aria("live", live),
			aria("atomic", "true"),
			tab_index("0"),
			data_slot("toast"),
			data("state", "open"),
			data("variant", props.variant.as_str()),
			data("duration", props.duration_ms.to_string()),
			class(classes),
		),
		children,
	)
}

/// Toast heading
pub fn toast_title(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			data_slot("toast-title"),
			class(cn!("text-sm font-semibold", class_name)),
		),
		children,
	)
}

/// Toast body text
pub fn toast_description(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			data_slot("toast-description"),
			class(cn!("text-sm opacity-90", class_name)),
		),
		children,
	)
}

/// Action button. `alt_text` describes the action for screen reader users
/// who cannot reach the button before the toast closes.
pub fn toast_action(alt_text: &str, class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"button",
		(
			r#type("button"),
			data_slot("toast-action"),
			data("alt-text", alt_text.to_owned()),
			class(cn!(
				"inline-flex h-8 shrink-0 items-center justify-center rounded-md border bg-transparent px-3 text-sm font-medium transition-colors hover:bg-secondary focus:outline-none focus:ring-1 focus:ring-ring disabled:pointer-events-none disabled:opacity-50 group-[.destructive]:border-muted/40 group-[.destructive]:hover:border-destructive/30 group-[.destructive]:hover:bg-destructive group-[.destructive]:hover:text-destructive-foreground",
				class_name
			)),
		),
		children,
	)
}

/// Close button with an `x` icon
pub fn toast_close(class_name: &str) -> Node {
	button((
		r#type("button"),
		data_slot("toast-close"),
		aria("label", "Close"),
		class(cn!(
			"absolute top-1 right-1 rounded-md p-1 text-foreground/50 opacity-0 transition-opacity hover:text-foreground focus:opacity-100 focus:outline-none focus:ring-1 group-hover:opacity-100 group-[.destructive]:text-red-300",
			class_name
		)),
		icons::x("size-4"),
	))
}

/// Notification region holding the toast list
pub fn toaster(class_name: &str, children: impl IntoChildren) -> Node {
	section((
		aria("label", "Notifications"),
		tab_index("-1"),
		data_slot("toaster"),
		compose(
			"ol",
			(
				tab_index("-1"),
				data_slot("toast-viewport"),
				class(cn!(VIEWPORT, class_name)),
			),
			children,
		),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ToastVariant::Default, "polite")]
	#[case(ToastVariant::Destructive, "assertive")]
	fn test_live_region(#[case] variant: ToastVariant, #[case] live: &str) {
		let html = toast(ToastProps::new().variant(variant), ()).render_to_string();
		assert!(html.starts_with(&format!(
			r#"<li role="status" aria-live="{live}" aria-atomic="true" tabindex="0" data-slot="toast" data-state="open" data-variant="{variant}" data-duration="5000" class="group "#
		)));
	}

	#[rstest]
	fn test_toast_composition() {
		let html = toaster(
			"",
			toast(
				ToastProps::new().duration_ms(8000),
				(
					div((
						class("grid gap-1"),
						toast_title("", "Saved"),
						toast_description("", "Your changes are live."),
					)),
					toast_action("Undo the save", "", "Undo"),
					toast_close(""),
				),
			),
		)
		.render_to_string();

		assert!(html.starts_with(
			r#"<section aria-label="Notifications" tabindex="-1" data-slot="toaster"><ol tabindex="-1" data-slot="toast-viewport" class="fixed top-0 "#
		));
		assert!(html.contains(r#"data-duration="8000""#));
		assert!(html.contains(
			r#"<div data-slot="toast-title" class="text-sm font-semibold">Saved</div>"#
		));
		assert!(html.contains(r#"data-alt-text="Undo the save""#));
		assert!(html.contains(r#"aria-label="Close""#));
		assert!(html.contains(r#"class="lucide lucide-x size-4""#));
		assert!(html.ends_with("</li></ol></section>"));
	}

	#[rstest]
	fn test_destructive_classes() {
		let html = toast(ToastProps::new().variant(ToastVariant::Destructive), ()).render_to_string();
		assert!(html.contains(" destructive border-destructive bg-destructive "));
	}
}
