//! Button
//!
//! Renders a `<button>`, or an `<a>` styled as a button when `href` is set.

use forma_core::prelude::*;
use forma_core::variant::{SIZE, VARIANT};

use crate::component::{compose, key_enum};

key_enum! {
	/// Visual style of a button
	ButtonVariant {
		#[default]
		Default => "default",
		Destructive => "destructive",
		Outline => "outline",
		Secondary => "secondary",
		Ghost => "ghost",
		Link => "link",
	}
}

key_enum! {
	/// Size preset of a button
	ButtonSize {
		#[default]
		Default => "default",
		Sm => "sm",
		Lg => "lg",
		Icon => "icon",
	}
}

key_enum! {
	/// `type` attribute of a `<button>`
	ButtonType {
		#[default]
		Button => "button",
		Submit => "submit",
		Reset => "reset",
	}
}

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

/// Class table for buttons
pub fn button_variants() -> VariantConfig {
	VariantConfig::new(BASE)
		.variant(VARIANT, "default", "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90")
		.variant(
			VARIANT,
			"destructive",
			"bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60",
		)
		.variant(
			VARIANT,
			"outline",
			"border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/50",
		)
		.variant(VARIANT, "secondary", "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80")
		.variant(VARIANT, "ghost", "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50")
		.variant(VARIANT, "link", "text-primary underline-offset-4 hover:underline")
		.variant(SIZE, "default", "h-9 px-4 py-2 has-[>svg]:px-3")
		.variant(SIZE, "sm", "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5")
		.variant(SIZE, "lg", "h-10 rounded-md px-6 has-[>svg]:px-4")
		.variant(SIZE, "icon", "size-9")
		.default_value(VARIANT, ButtonVariant::Default.as_str())
		.default_value(SIZE, ButtonSize::Default.as_str())
}

/// Button classes, for styling other elements as buttons
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class_name: &str) -> String {
	button_variants().resolve(
		&VariantProps::new()
			.variant(variant.as_str())
			.size(size.as_str())
			.class(class_name),
	)
}

/// Button properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
	/// Visual style
	pub variant: ButtonVariant,
	/// Size preset
	pub size: ButtonSize,
	/// `type` of the `<button>`; ignored for links
	pub button_type: ButtonType,
	/// Extra classes
	pub class: String,
	/// Element id
	pub id: Option<String>,
	/// Form field name
	pub name: Option<String>,
	/// Form field value
	pub value: Option<String>,
	/// Renders an `<a>` when set
	pub href: Option<String>,
	/// Disabled state
	pub disabled: bool,
	/// Accessible name, for icon-only buttons
	pub aria_label: Option<String>,
}

impl ButtonProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the visual style
	pub fn variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Set the size preset
	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Set the `type` attribute
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Set the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Set the form field name and value
	pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self.value = Some(value.into());
		self
	}

	/// Render as a link
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
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
}

/// Renders a button.
///
/// Links cannot be disabled natively, so a disabled link gets
/// `aria-disabled="true"` and `tabindex="-1"` instead.
pub fn button(props: ButtonProps, children: impl IntoChildren) -> Node {
	let shared = group((
		data_slot("button"),
		data("variant", props.variant.as_str()),
		data("size", props.size.as_str()),
		class(button_class(props.variant, props.size, &props.class)),
		props.id.map(id),
		props.aria_label.map(|label| aria("label", label)),
	));

	match props.href {
		Some(url) => compose(
			"a",
			(
				shared,
				href(url),
				when(props.disabled, group((aria("disabled", "true"), tab_index("-1")))),
			),
			children,
		),
		None => compose(
			"button",
			(
				shared,
				r#type(props.button_type.as_str()),
				flag("disabled", props.disabled),
				props.name.map(name),
				props.value.map(value),
			),
			children,
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::icons;
	use rstest::rstest;

	#[rstest]
	#[case(ButtonVariant::Default, ButtonSize::Default, "bg-primary", "h-9")]
	#[case(ButtonVariant::Destructive, ButtonSize::Sm, "bg-destructive", "h-8")]
	#[case(ButtonVariant::Outline, ButtonSize::Lg, "bg-background", "h-10")]
	#[case(ButtonVariant::Secondary, ButtonSize::Icon, "bg-secondary", "size-9")]
	#[case(ButtonVariant::Ghost, ButtonSize::Default, "hover:bg-accent", "px-4")]
	#[case(ButtonVariant::Link, ButtonSize::Default, "underline-offset-4", "py-2")]
	fn test_button_class(
		#[case] variant: ButtonVariant,
		#[case] size: ButtonSize,
		#[case] variant_token: &str,
		#[case] size_token: &str,
	) {
		let classes = button_class(variant, size, "");
		let tokens: Vec<&str> = classes.split(' ').collect();
		assert!(classes.starts_with("inline-flex items-center justify-center"));
		assert!(tokens.contains(&variant_token));
		assert!(tokens.contains(&size_token));
	}

	#[rstest]
	fn test_every_key_has_classes() {
		let table = button_variants();
		for variant in ButtonVariant::ALL {
			assert!(table.classes_for(VARIANT, variant.as_str()).is_some());
		}
		for size in ButtonSize::ALL {
			assert!(table.classes_for(SIZE, size.as_str()).is_some());
		}
	}

	#[rstest]
	fn test_user_class_is_last_and_deduplicated() {
		let classes = button_class(ButtonVariant::Default, ButtonSize::Default, "w-full h-9");
		assert!(classes.ends_with("has-[>svg]:px-3 w-full"));
		assert_eq!(classes.matches("h-9").count(), 1);
	}

	#[rstest]
	fn test_button_renders_button_element() {
		let html = button(
			ButtonProps::new()
				.variant(ButtonVariant::Outline)
				.size(ButtonSize::Sm)
				.button_type(ButtonType::Submit)
				.disabled(true),
			"Save",
		)
		.render_to_string();

		assert!(html.starts_with(
			r#"<button data-slot="button" data-variant="outline" data-size="sm" class=""#
		));
		assert!(html.ends_with(r#" type="submit" disabled>Save</button>"#));
		assert!(html.contains("[&amp;_svg]:pointer-events-none"));
	}

	#[rstest]
	fn test_button_with_href_renders_link() {
		let html = button(ButtonProps::new().href("/docs").variant(ButtonVariant::Link), "Docs")
			.render_to_string();
		assert!(html.starts_with(r#"<a data-slot="button" data-variant="link""#));
		assert!(html.ends_with(r#" href="/docs">Docs</a>"#));
		assert!(!html.contains("type="));
	}

	#[rstest]
	fn test_disabled_link_is_aria_disabled() {
		let html = button(ButtonProps::new().href("/x").disabled(true), "X").render_to_string();
		assert!(html.contains(r#" href="/x" aria-disabled="true" tabindex="-1">X</a>"#));
		// `disabled:` class tokens are expected; only the attribute is not
		let (_, attrs) = html.split_once(r#"" href="#).unwrap();
		assert!(!attrs.contains(" disabled"));
		assert!(!html.contains(" disabled>"));
		assert!(!html.contains(" disabled="));
	}

	#[rstest]
	fn test_icon_button_with_label_and_field() {
		let html = button(
			ButtonProps::new()
				.size(ButtonSize::Icon)
				.aria_label("Close")
				.id("close")
				.field("action", "close"),
			icons::x(""),
		)
		.render_to_string();
		assert!(html.contains(r#" id="close" aria-label="Close" type="button" name="action" value="close">"#));
		assert!(html.contains("<svg "));
	}

	#[rstest]
	fn test_caller_attributes_are_lifted() {
		let html = button(ButtonProps::new(), (attr("hx-post", "/save"), "Save")).render_to_string();
		assert!(html.contains(r#" type="button" hx-post="/save">Save</button>"#));
	}
}
