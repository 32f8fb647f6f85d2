//! # forma
//!
//! Server-rendered HTML components in the style of shadcn/ui.
//!
//! Pages are built as plain values: a tree of [`Node`]s made from element
//! and attribute helpers, styled through Tailwind class strings that are
//! composed with [`cn!`] and resolved from declarative variant tables. The
//! tree renders to HTML in a single pass with all text and attribute values
//! escaped. No client runtime is involved.
//!
//! ## Crates
//!
//! - [`core`] (`forma-core`): node model, renderer, class composer, variants
//! - [`components`] (`forma-components`): component catalogue, theme,
//!   responsive helpers and icons
//!
//! ## Feature Flags
//!
//! - `components` (default): the component catalogue
//! - `calendar`: the month grid calendar (pulls in `chrono`)
//!
//! Without `components` only the core primitives are available, which is
//! enough to write a custom component set.
//!
//! ## Quick Example
//!
//! ```
//! use forma::prelude::*;
//!
//! let theme = Theme::default_theme();
//! let page = div((
//! 	theme.style_node(),
//! 	card(
//! 		"max-w-sm",
//! 		(
//! 			card_header("", card_title("", "Invite sent")),
//! 			card_footer(
//! 				"",
//! 				button(ButtonProps::new().variant(ButtonVariant::Outline), "Close"),
//! 			),
//! 		),
//! 	),
//! ));
//!
//! let html = page.render_to_string();
//! assert!(html.contains(r#"data-slot="card-title""#));
//! assert!(html.contains(">Close</button>"));
//! ```

pub use forma_core as core;
#[cfg(feature = "components")]
pub use forma_components as components;

// Re-export core types
pub use forma_core::{
	Attribute, DuplicateAttributes, Element, HtmlRenderer, IntoChildren, IntoNode, Node,
	RenderError, RenderOptions, VariantConfig, VariantError, VariantProps, VoidStyle, cn,
};

// Re-export component-level types
#[cfg(feature = "components")]
pub use forma_components::{
	Breakpoint, CheckedState, ComponentError, Orientation, Palette, PaletteOverrides,
	ResponsiveValue, Theme,
};

/// Everything needed to build a page.
///
/// With the `components` feature this is the component prelude, whose
/// factories shadow the same-named element helpers (`button`, `input`,
/// `label`, `textarea`). Without it, the core prelude.
pub mod prelude {
	#[cfg(not(feature = "components"))]
	pub use forma_core::prelude::*;

	#[cfg(feature = "components")]
	pub use forma_components::prelude::*;
}
