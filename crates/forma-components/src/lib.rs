//! # forma-components
//!
//! shadcn/ui-style components rendered on the server as [`forma_core`]
//! node trees.
//!
//! - [`components`]: the catalogue (buttons, form controls, cards, toasts, ...)
//! - [`theme`]: light and dark CSS custom properties, loadable from TOML
//! - [`responsive`]: breakpoint prefixes for Tailwind classes
//! - [`icons`]: inline lucide SVG icons used by the components
//!
//! ## Feature Flags
//!
//! - `calendar`: the month grid calendar, built on `chrono`
//!
//! ## Example
//!
//! ```
//! use forma_components::prelude::*;
//!
//! let html = button(
//! 	ButtonProps::new().variant(ButtonVariant::Outline).size(ButtonSize::Sm),
//! 	"Cancel",
//! )
//! .render_to_string();
//!
//! assert!(html.starts_with(r#"<button data-slot="button" data-variant="outline" data-size="sm" class=""#));
//! assert!(html.ends_with(">Cancel</button>"));
//! ```

pub mod component;
pub mod components;
pub mod error;
pub mod icons;
pub mod responsive;
pub mod theme;

pub use component::{CheckedState, Orientation};
pub use error::{ComponentError, Result};
pub use responsive::{Breakpoint, ResponsiveValue};
pub use theme::{Palette, PaletteOverrides, Theme};

/// Re-exports for building pages: the core prelude, every component
/// factory with its properties, and the theme types.
///
/// Component factories named like HTML elements (`button`, `input`,
/// `label`, `textarea`) take precedence over the raw element helpers, which
/// stay reachable through [`forma_core::node::html`].
pub mod prelude {
	pub use forma_core::prelude::*;

	pub use crate::component::{CheckedState, Orientation};
	pub use crate::components::*;
	// Explicit imports win over both globs above.
	pub use crate::components::{button, input, label, textarea};
	pub use crate::error::ComponentError;
	pub use crate::icons;
	pub use crate::responsive::{Breakpoint, ResponsiveValue};
	pub use crate::theme::{Palette, PaletteOverrides, Theme};
}
