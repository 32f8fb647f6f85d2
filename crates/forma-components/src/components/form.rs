//! Form field helpers
//!
//! A [`FormField`] derives the ids that tie a label, its control, the help
//! text and the error message together, so every part of one field agrees
//! on `for`, `id` and `aria-describedby`.

use forma_core::prelude::*;

use crate::component::compose;
use crate::components::label::LABEL_BASE;

/// One form field: its name and, after validation, its error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
	/// Field name, used as the id prefix
	pub name: String,
	/// Validation error, if any
	pub error: Option<String>,
}

impl FormField {
	/// Create a field without an error
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			error: None,
		}
	}

	/// Attach a validation error
	pub fn error(mut self, message: impl Into<String>) -> Self {
		self.error = Some(message.into());
		self
	}

	/// Whether the field failed validation
	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	/// Id of the control
	pub fn item_id(&self) -> String {
		format!("{}-form-item", self.name)
	}

	/// Id of the help text
	pub fn description_id(&self) -> String {
		format!("{}-form-item-description", self.name)
	}

	/// Id of the error message
	pub fn message_id(&self) -> String {
		format!("{}-form-item-message", self.name)
	}

	/// `aria-describedby` of the control: the help text, plus the message
	/// while there is an error
	pub fn described_by(&self) -> String {
		if self.has_error() {
			format!("{} {}", self.description_id(), self.message_id())
		} else {
			self.description_id()
		}
	}
}

/// Wrapper around one field's parts
pub fn form_item(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(data_slot("form-item"), class(cn!("grid gap-2", class_name))),
		children,
	)
}

/// Field label, turning destructive while the field has an error
pub fn form_label(field: &FormField, class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"label",
		(
			data_slot("form-label"),
			data("error", field.has_error().to_string()),
			class(cn!(
				LABEL_BASE,
				"data-[error=true]:text-destructive",
				class_name
			)),
			r#for(field.item_id()),
		),
		children,
	)
}

/// Attributes for the field's control, as a group.
///
/// Pass it as the extra argument of a control factory, e.g.
/// `input(props, form_control(&field))`.
pub fn form_control(field: &FormField) -> Node {
	group((
		id(field.item_id()),
		aria("describedby", field.described_by()),
		aria_bool("invalid", field.has_error()),
	))
}

/// Help text below the control
pub fn form_description(field: &FormField, class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"p",
		(
			data_slot("form-description"),
			id(field.description_id()),
			class(cn!("text-muted-foreground text-sm", class_name)),
		),
		children,
	)
}

/// Error message. Shows the field's error when present, otherwise
/// `children`; renders nothing when both are absent.
pub fn form_message(field: &FormField, class_name: &str, children: impl IntoChildren) -> Node {
	let body = match &field.error {
		Some(message) => vec![text(message.clone())],
		None => children
			.into_children()
			.into_iter()
			.filter(|node| !node.is_empty())
			.collect(),
	};
	if body.is_empty() {
		return empty();
	}
	compose(
		"p",
		(
			data_slot("form-message"),
			id(field.message_id()),
			class(cn!("text-destructive text-sm", class_name)),
		),
		body,
	)
}
