//! # forma-core
//!
//! The composition substrate of the forma component library:
//!
//! - [`node`]: the node/attribute model ([`Node`], [`Element`], [`Attribute`])
//!   with element and attribute helpers;
//! - [`render`]: single-pass HTML serialisation with escaping;
//! - [`class`]: the first-seen deduplicating class composer ([`cn!`]);
//! - [`variant`]: declarative variant tables ([`VariantConfig`]).
//!
//! Everything here is a pure value. Trees are built, rendered, and dropped;
//! nothing is cached or shared between renders, so disjoint trees can be
//! rendered from any number of threads.
//!
//! ## Example
//!
//! ```
//! use forma_core::prelude::*;
//!
//! let cfg = VariantConfig::new("rounded-md")
//! 	.variant("variant", "outline", "border")
//! 	.default_value("variant", "outline");
//!
//! let html = button((
//! 	class(cfg.resolve(&VariantProps::new().class("px-4"))),
//! 	r#type("button"),
//! 	when(true, disabled()),
//! 	"Save",
//! ))
//! .render_to_string();
//!
//! assert_eq!(
//! 	html,
//! 	r#"<button class="rounded-md border px-4" type="button" disabled>Save</button>"#
//! );
//! ```

pub mod class;
pub mod error;
pub mod node;
pub mod render;
pub mod variant;

pub use error::{RenderError, Result, VariantError};
pub use node::{Attribute, Element, IntoChildren, IntoNode, Node};
pub use render::{DuplicateAttributes, HtmlRenderer, RenderOptions, VoidStyle};
pub use variant::{VariantConfig, VariantProps};

/// Commonly used items: node types, constructors, element and attribute
/// helpers, the class composer, and variant tables.
pub mod prelude {
	pub use crate::class::{cn, cn_if, merge_classes};
	pub use crate::cn;
	pub use crate::node::attributes::*;
	pub use crate::node::html::*;
	pub use crate::node::{
		Attribute, Element, IntoChildren, IntoNode, Node, attr, attr_valueless, element, empty,
		group, text, unsafe_raw, when, when_else,
	};
	pub use crate::render::{HtmlRenderer, RenderOptions};
	pub use crate::variant::{VariantConfig, VariantProps};
}
