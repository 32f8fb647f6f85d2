//! Card and its parts

use forma_core::prelude::*;

use crate::component::compose;

fn part(slot: &'static str, base: &str, class_name: &str, children: impl IntoChildren) -> Node {
	compose("div", (data_slot(slot), class(cn!(base, class_name))), children)
}

/// Card container
pub fn card(class_name: &str, children: impl IntoChildren) -> Node {
	part(
		"card",
		"bg-card text-card-foreground flex flex-col gap-6 rounded-xl border py-6 shadow-sm",
		class_name,
		children,
	)
}

/// Header row holding the title, description and an optional action
pub fn card_header(class_name: &str, children: impl IntoChildren) -> Node {
	part(
		"card-header",
		"@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6",
		class_name,
		children,
	)
}

/// Card heading
pub fn card_title(class_name: &str, children: impl IntoChildren) -> Node {
	part("card-title", "leading-none font-semibold", class_name, children)
}

/// Muted text under the title
pub fn card_description(class_name: &str, children: impl IntoChildren) -> Node {
	part("card-description", "text-muted-foreground text-sm", class_name, children)
}

/// Top-right slot of the header
pub fn card_action(class_name: &str, children: impl IntoChildren) -> Node {
	part(
		"card-action",
		"col-start-2 row-span-2 row-start-1 self-start justify-self-end",
		class_name,
		children,
	)
}

/// Card body
pub fn card_content(class_name: &str, children: impl IntoChildren) -> Node {
	part("card-content", "px-6", class_name, children)
}

/// Bottom row
pub fn card_footer(class_name: &str, children: impl IntoChildren) -> Node {
	part("card-footer", "flex items-center px-6 [.border-t]:pt-6", class_name, children)
}
