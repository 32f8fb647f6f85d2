//! Avatar, with image and fallback parts

use forma_core::prelude::*;

use crate::component::compose;

/// Avatar frame
pub fn avatar(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"span",
		(
			data_slot("avatar"),
			class(cn!(
				"relative flex size-8 shrink-0 overflow-hidden rounded-full",
				class_name
			)),
		),
		children,
	)
}

/// Avatar image properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarImageProps {
	/// Image URL
	pub src: String,
	/// Alternative text
	pub alt: String,
	/// Extra classes
	pub class: String,
}

impl AvatarImageProps {
	/// Create properties for an image
	pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			alt: alt.into(),
			class: String::new(),
		}
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Avatar picture. `<img>` is void, so `extra` only adds attributes.
pub fn avatar_image(props: AvatarImageProps, extra: impl IntoChildren) -> Node {
	compose(
		"img",
		(
			data_slot("avatar-image"),
			class(cn!("aspect-square size-full", props.class)),
			src(props.src),
			alt(props.alt),
		),
		extra,
	)
}

/// Initials or icon shown when there is no image
pub fn avatar_fallback(class_name: &str, children: impl IntoChildren) -> Node {
	compose(
		"span",
		(
			data_slot("avatar-fallback"),
			class(cn!(
				"bg-muted flex size-full items-center justify-center rounded-full",
				class_name
			)),
		),
		children,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use insta::assert_snapshot;
	use rstest::rstest;

	#[rstest]
	fn test_avatar_snapshot() {
		let node = avatar(
			"",
			(
				avatar_image(AvatarImageProps::new("/u/ada.png", "Ada"), ()),
				avatar_fallback("", "AL"),
			),
		);
		assert_snapshot!(
			node.render_to_string(),
			@r#"<span data-slot="avatar" class="relative flex size-8 shrink-0 overflow-hidden rounded-full"><img data-slot="avatar-image" class="aspect-square size-full" src="/u/ada.png" alt="Ada"><span data-slot="avatar-fallback" class="bg-muted flex size-full items-center justify-center rounded-full">AL</span></span>"#
		);
	}

	#[rstest]
	fn test_avatar_image_extra_attributes() {
		let html = avatar_image(
			AvatarImageProps::new("/a.png", "").class("grayscale"),
			attr("loading", "lazy"),
		)
		.render_to_string();
		assert_eq!(
			html,
			r#"<img data-slot="avatar-image" class="aspect-square size-full grayscale" src="/a.png" alt="" loading="lazy">"#
		);
	}
}
