//! Fixed aspect ratio box
//!
//! Uses the padding-bottom technique so the box keeps its shape without
//! the CSS `aspect-ratio` property.

use forma_core::prelude::*;

use crate::component::compose;

/// Aspect ratio properties
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatioProps {
	/// Width divided by height
	pub ratio: f64,
	/// Extra classes
	pub class: String,
}

impl Default for AspectRatioProps {
	fn default() -> Self {
		Self {
			ratio: 1.0,
			class: String::new(),
		}
	}
}

impl AspectRatioProps {
	/// Create properties for `ratio`
	pub fn new(ratio: f64) -> Self {
		Self {
			ratio,
			class: String::new(),
		}
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Ratio actually used: zero, negative or non-finite ratios become 1.0
	pub fn effective_ratio(&self) -> f64 {
		if self.ratio.is_finite() && self.ratio > 0.0 {
			self.ratio
		} else {
			tracing::debug!(ratio = self.ratio, "invalid aspect ratio, using 1.0");
			1.0
		}
	}
}

/// Renders the outer sizing box and an absolutely positioned content box
pub fn aspect_ratio(props: AspectRatioProps, children: impl IntoChildren) -> Node {
	let ratio = props.effective_ratio();
	compose(
		"div",
		(
			data_slot("aspect-ratio"),
			data("aspect-ratio", format!("{ratio:.2}")),
			style(format!(
				"position: relative; width: 100%; padding-bottom: {:.4}%;",
				100.0 / ratio
			)),
			when(!props.class.is_empty(), class(props.class)),
		),
		compose("div", style("position: absolute; inset: 0;"), children),
	)
}
