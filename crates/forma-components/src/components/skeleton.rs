//! Loading placeholder

use forma_core::prelude::*;

use crate::component::compose;

/// Renders a pulsing placeholder block. Size it through `class_name`.
pub fn skeleton(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"div",
		(
			data_slot("skeleton"),
			class(cn!("bg-accent animate-pulse rounded-md", class_name)),
		),
		children,
	)
}
