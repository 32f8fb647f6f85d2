//! Shared component types
//!
//! Key enums for variant and size selectors, orientation, and the binary
//! state helpers that keep `aria-*` and `data-state` in step.

use forma_core::prelude::*;

/// Declares a selector enum whose variants map to class-table keys.
///
/// Generated items: `ALL`, `as_str`, lenient `from_key` (unknown keys fall
/// back to the `#[default]` variant), strict `FromStr`, and `Display`.
macro_rules! key_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
		pub enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $name {
			/// Every value, in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// Key used in class tables and `data-*` attributes.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $key),+
				}
			}

			/// Parses a key, falling back to the default for unknown keys.
			pub fn from_key(key: &str) -> Self {
				key.parse().unwrap_or_else(|_| {
					let fallback = Self::default();
					tracing::debug!(
						key,
						kind = stringify!($name),
						fallback = fallback.as_str(),
						"unknown key, using default"
					);
					fallback
				})
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::error::ComponentError;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				match s.trim() {
					$($key => Ok(Self::$variant),)+
					other => Err($crate::error::ComponentError::InvalidProperty(format!(
						"unknown {} `{}`",
						stringify!($name),
						other
					))),
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

pub(crate) use key_enum;

key_enum! {
	/// Layout direction of separators, radio groups and toggle groups
	Orientation {
		#[default]
		Horizontal => "horizontal",
		Vertical => "vertical",
	}
}

/// Checked state of a checkbox-like control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckedState {
	/// Checked
	Checked,
	/// Not checked
	#[default]
	Unchecked,
	/// Neither (checkbox only)
	Indeterminate,
}

impl CheckedState {
	/// Value of `aria-checked`.
	pub fn aria_checked(&self) -> &'static str {
		match self {
			Self::Checked => "true",
			Self::Unchecked => "false",
			Self::Indeterminate => "mixed",
		}
	}

	/// Value of `data-state`.
	pub fn data_state(&self) -> &'static str {
		match self {
			Self::Checked => "checked",
			Self::Unchecked => "unchecked",
			Self::Indeterminate => "indeterminate",
		}
	}

	/// Returns whether this is [`CheckedState::Checked`].
	pub fn is_checked(&self) -> bool {
		matches!(self, Self::Checked)
	}

	/// `aria-checked` and `data-state` as one attribute group.
	pub fn attributes(&self) -> Node {
		group((aria("checked", self.aria_checked()), data("state", self.data_state())))
	}
}

impl From<bool> for CheckedState {
	fn from(checked: bool) -> Self {
		if checked { Self::Checked } else { Self::Unchecked }
	}
}

/// `data-state="checked"` or `data-state="unchecked"`.
pub fn data_state_checked(checked: bool) -> Node {
	data("state", CheckedState::from(checked).data_state())
}

/// `data-state="on"` or `data-state="off"`.
pub fn data_state_on(on: bool) -> Node {
	data("state", if on { "on" } else { "off" })
}

/// `aria-pressed` and `data-state` for toggle buttons.
pub fn pressed_attributes(pressed: bool) -> Node {
	group((aria_bool("pressed", pressed), data_state_on(pressed)))
}

/// Builds a component root: the component's own attributes and parts first,
/// then the caller's children unchanged.
pub(crate) fn compose(tag: &'static str, own: impl IntoChildren, children: impl IntoChildren) -> Node {
	Element::new(tag).children(own).children(children).into()
}

/// Visually hidden native input mirroring a button-based control, so the
/// value takes part in form submission.
pub(crate) fn bubble_input(kind: &'static str, field: &str, field_value: &str, is_checked: bool) -> Node {
	input((
		r#type(kind),
		aria("hidden", "true"),
		tab_index("-1"),
		name(field.to_owned()),
		value(field_value.to_owned()),
		when(is_checked, checked()),
		style("position: absolute; pointer-events: none; opacity: 0; margin: 0; transform: translateX(-100%);"),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("horizontal", Orientation::Horizontal)]
	#[case("vertical", Orientation::Vertical)]
	#[case(" vertical ", Orientation::Vertical)]
	#[case("diagonal", Orientation::Horizontal)]
	#[case("", Orientation::Horizontal)]
	fn test_orientation_from_key(#[case] key: &str, #[case] expected: Orientation) {
		assert_eq!(Orientation::from_key(key), expected);
	}

	#[rstest]
	fn test_strict_parse_rejects_unknown_key() {
		let err = "diagonal".parse::<Orientation>().unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid component property: unknown Orientation `diagonal`"
		);
	}

	#[rstest]
	fn test_all_round_trips_through_as_str() {
		for value in Orientation::ALL {
			assert_eq!(value.as_str().parse::<Orientation>().unwrap(), *value);
			assert_eq!(value.to_string(), value.as_str());
		}
	}

	#[rstest]
	#[case(CheckedState::Checked, r#"<i aria-checked="true" data-state="checked"></i>"#)]
	#[case(CheckedState::Unchecked, r#"<i aria-checked="false" data-state="unchecked"></i>"#)]
	#[case(CheckedState::Indeterminate, r#"<i aria-checked="mixed" data-state="indeterminate"></i>"#)]
	fn test_checked_state_dual_encoding(#[case] state: CheckedState, #[case] expected: &str) {
		assert_eq!(element("i", state.attributes()).render_to_string(), expected);
	}

	#[rstest]
	#[case(true, r#"<i aria-pressed="true" data-state="on"></i>"#)]
	#[case(false, r#"<i aria-pressed="false" data-state="off"></i>"#)]
	fn test_pressed_attributes(#[case] pressed: bool, #[case] expected: &str) {
		assert_eq!(element("i", pressed_attributes(pressed)).render_to_string(), expected);
	}

	#[rstest]
	fn test_compose_puts_own_attributes_first() {
		let node = compose("div", (data_slot("x"), class("a")), (id("caller"), "child"));
		assert_eq!(
			node.render_to_string(),
			r#"<div data-slot="x" class="a" id="caller">child</div>"#
		);
	}

	#[rstest]
	fn test_bubble_input() {
		let html = bubble_input("checkbox", "terms", "on", true).render_to_string();
		assert!(html.starts_with(
			r#"<input type="checkbox" aria-hidden="true" tabindex="-1" name="terms" value="on" checked style=""#
		));
		let html = bubble_input("radio", "plan", "pro", false).render_to_string();
		assert!(!html.contains("checked"));
	}
}
