//! Declarative variant tables.
//!
//! A [`VariantConfig`] maps a component's selectors (`variant`, `size`, and
//! any others a component defines) onto class strings. [`VariantConfig::resolve`]
//! turns a caller's [`VariantProps`] into the final class string:
//!
//! 1. start from `base`;
//! 2. for each selector (`variant`, then `size`, then the remaining table
//!    selectors in declaration order), take the caller's value or the
//!    table default, and append the matching classes if the table has them;
//! 3. append the caller's `class` last;
//! 4. merge everything through [`cn`].
//!
//! Unknown selector values contribute nothing; they are not errors.
//!
//! Tables can be written in code or loaded from JSON:
//!
//! ```
//! use forma_core::variant::{VariantConfig, VariantProps};
//!
//! let cfg = VariantConfig::from_json(
//! 	r#"{"base": "a", "variants": {"variant": {"x": "b"}}, "defaults": {"variant": "x"}}"#,
//! )
//! .unwrap();
//! assert_eq!(cfg.resolve(&VariantProps::new()), "a b");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::class::cn;
use crate::error::VariantError;

/// Selector name for the visual variant.
pub const VARIANT: &str = "variant";

/// Selector name for the size preset.
pub const SIZE: &str = "size";

/// Selectors resolved before any component-specific ones.
const PRIMARY_SELECTORS: [&str; 2] = [VARIANT, SIZE];

/// Class table driving a component's class computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
	/// Classes always applied.
	pub base: String,
	/// selector name → selector value → classes.
	pub variants: IndexMap<String, IndexMap<String, String>>,
	/// selector name → value used when the caller leaves the selector empty.
	pub defaults: IndexMap<String, String>,
}

impl VariantConfig {
	/// Creates a table with only base classes.
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			..Self::default()
		}
	}

	/// Loads a table from its JSON form.
	pub fn from_json(json: &str) -> Result<Self, VariantError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Registers the classes for `selector = value`.
	pub fn variant(
		mut self,
		selector: impl Into<String>,
		value: impl Into<String>,
		classes: impl Into<String>,
	) -> Self {
		self.variants
			.entry(selector.into())
			.or_default()
			.insert(value.into(), classes.into());
		self
	}

	/// Sets the value used when the caller leaves `selector` empty.
	pub fn default_value(mut self, selector: impl Into<String>, value: impl Into<String>) -> Self {
		self.defaults.insert(selector.into(), value.into());
		self
	}

	/// Selectors in resolution order: `variant`, `size`, then the rest of the
	/// table in declaration order.
	pub fn selectors(&self) -> impl Iterator<Item = &str> {
		let primary: [&str; 2] = PRIMARY_SELECTORS;
		primary.into_iter().chain(
			self.variants
				.keys()
				.map(String::as_str)
				.filter(|s| !PRIMARY_SELECTORS.iter().any(|p| p == s)),
		)
	}

	/// Returns the classes registered for `selector = value`.
	pub fn classes_for(&self, selector: &str, value: &str) -> Option<&str> {
		self.variants
			.get(selector)
			.and_then(|table| table.get(value))
			.map(String::as_str)
	}

	/// Computes the final class string for `props`.
	pub fn resolve(&self, props: &VariantProps) -> String {
		let mut parts: Vec<&str> = Vec::with_capacity(PRIMARY_SELECTORS.len() + 2);
		parts.push(&self.base);

		for selector in self.selectors() {
			let requested = props.get(selector).map(str::trim).filter(|v| !v.is_empty());
			let Some(value) = requested.or_else(|| self.defaults.get(selector).map(String::as_str))
			else {
				continue;
			};
			match self.classes_for(selector, value) {
				Some(classes) => parts.push(classes),
				None => tracing::trace!(selector, value, "no classes registered for variant value"),
			}
		}

		if let Some(class) = props.class.as_deref() {
			parts.push(class);
		}
		cn(parts)
	}
}

/// Selector values and class override supplied by a component caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProps {
	/// Value of the `variant` selector.
	pub variant: Option<String>,
	/// Value of the `size` selector.
	pub size: Option<String>,
	/// Extra classes appended after every resolved variant.
	pub class: Option<String>,
	/// Values of component-specific selectors.
	pub extra: IndexMap<String, String>,
}

impl VariantProps {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `variant` selector.
	pub fn variant(mut self, value: impl Into<String>) -> Self {
		self.variant = Some(value.into());
		self
	}

	/// Sets the `size` selector.
	pub fn size(mut self, value: impl Into<String>) -> Self {
		self.size = Some(value.into());
		self
	}

	/// Sets the class override.
	pub fn class(mut self, value: impl Into<String>) -> Self {
		self.class = Some(value.into());
		self
	}

	/// Sets any selector by name.
	pub fn selector(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		let value = value.into();
		if name == VARIANT {
			self.variant = Some(value);
		} else if name == SIZE {
			self.size = Some(value);
		} else {
			self.extra.insert(name, value);
		}
		self
	}

	/// Returns the value supplied for `selector`.
	pub fn get(&self, selector: &str) -> Option<&str> {
		match selector {
			VARIANT => self.variant.as_deref(),
			SIZE => self.size.as_deref(),
			other => self.extra.get(other).map(String::as_str),
		}
	}
}
