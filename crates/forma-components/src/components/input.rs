//! Text input

use forma_core::prelude::*;

use crate::component::compose;

const BASE: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

/// Input properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
	/// `type` attribute
	pub input_type: String,
	/// Extra classes
	pub class: String,
	/// Element id
	pub id: Option<String>,
	/// Form field name
	pub name: Option<String>,
	/// Current value
	pub value: Option<String>,
	/// Placeholder text
	pub placeholder: Option<String>,
	/// `autocomplete` hint
	pub autocomplete: Option<String>,
	/// Disabled state
	pub disabled: bool,
	/// Required field
	pub required: bool,
	/// Read-only field
	pub read_only: bool,
	/// Marks the field invalid (`aria-invalid`)
	pub invalid: bool,
}

impl Default for InputProps {
	fn default() -> Self {
		Self {
			input_type: "text".into(),
			class: String::new(),
			id: None,
			name: None,
			value: None,
			placeholder: None,
			autocomplete: None,
			disabled: false,
			required: false,
			read_only: false,
			invalid: false,
		}
	}
}

impl InputProps {
	/// Create default properties (`type="text"`)
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the `type` attribute
	pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
		self.input_type = input_type.into();
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

	/// Set the form field name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Set the current value
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Set the placeholder
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Set the `autocomplete` hint
	pub fn autocomplete(mut self, hint: impl Into<String>) -> Self {
		self.autocomplete = Some(hint.into());
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

/// Renders an `<input>`.
///
/// `<input>` is void, so `extra` may only contribute attributes; any
/// non-attribute nodes in it are dropped by the renderer.
pub fn input(props: InputProps, extra: impl IntoChildren) -> Node {
	compose(
		"input",
		(
			data_slot("input"),
			r#type(props.input_type),
			class(cn!(BASE, props.class)),
			props.id.map(id),
			props.name.map(name),
			props.value.map(value),
			props.placeholder.map(placeholder),
			props.autocomplete.map(autocomplete),
			flag("disabled", props.disabled),
			flag("required", props.required),
			flag("readonly", props.read_only),
			when(props.invalid, aria("invalid", "true")),
		),
		extra,
	)
}
