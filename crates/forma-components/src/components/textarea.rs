//! Multi-line text input

use forma_core::prelude::*;

use crate::component::compose;

const BASE: &str = "border-input placeholder:text-muted-foreground focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive dark:bg-input/30 flex field-sizing-content min-h-16 w-full rounded-md border bg-transparent px-3 py-2 text-base shadow-xs transition-[color,box-shadow] outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Textarea properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextareaProps {
	/// Extra classes
	pub class: String,
	/// Element id
	pub id: Option<String>,
	/// Form field name
	pub name: Option<String>,
	/// Initial text; rendered escaped as the element's content
	pub value: Option<String>,
	/// Placeholder text
	pub placeholder: Option<String>,
	/// Visible rows
	pub rows: Option<u32>,
	/// Disabled state
	pub disabled: bool,
	/// Required field
	pub required: bool,
	/// Read-only field
	pub read_only: bool,
	/// Marks the field invalid (`aria-invalid`)
	pub invalid: bool,
}

impl TextareaProps {
	/// Create default properties
	pub fn new() -> Self {
		Self::default()
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

	/// Set the form field name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Set the initial text
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Set the placeholder
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Set the visible rows
	pub fn rows(mut self, rows: u32) -> Self {
		self.rows = Some(rows);
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

	/// Mark the field read-only
	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	/// Mark the field invalid
	pub fn invalid(mut self, invalid: bool) -> Self {
		self.invalid = invalid;
		self
	}
}

/// Renders a `<textarea>`. `children` may add attributes; the text content
/// comes from `props.value`.
pub fn textarea(props: TextareaProps, children: impl IntoChildren) -> Node {
	compose(
		"textarea",
		(
			data_slot("textarea"),
			class(cn!(BASE, props.class)),
			props.id.map(id),
			props.name.map(name),
			props.placeholder.map(placeholder),
			props.rows.map(|n| rows(n.to_string())),
			flag("disabled", props.disabled),
			flag("required", props.required),
			flag("readonly", props.read_only),
			when(props.invalid, aria("invalid", "true")),
			props.value.map(text),
		),
		children,
	)
}
