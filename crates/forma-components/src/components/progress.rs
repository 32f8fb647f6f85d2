//! Progress bar

use forma_core::prelude::*;

use crate::component::compose;

const MAX: f64 = 100.0;

/// Progress properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressProps {
	/// Completion in percent; `None` means indeterminate
	pub value: Option<f64>,
	/// Extra classes
	pub class: String,
}

impl ProgressProps {
	/// Create an indeterminate progress bar
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the completion in percent
	pub fn value(mut self, value: f64) -> Self {
		self.value = Some(value);
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Completion clamped to `0..=100`. NaN counts as indeterminate.
	pub fn clamped_value(&self) -> Option<f64> {
		let raw = self.value.filter(|v| !v.is_nan())?;
		let clamped = raw.clamp(0.0, MAX);
		if clamped != raw {
			tracing::debug!(value = raw, clamped, "progress value out of range");
		}
		Some(clamped)
	}

	/// `complete`, `loading` or `indeterminate`
	pub fn state(&self) -> &'static str {
		match self.clamped_value() {
			None => "indeterminate",
			Some(v) if v >= MAX => "complete",
			Some(_) => "loading",
		}
	}
}

/// Renders a progress bar with its indicator
pub fn progress(props: ProgressProps, children: impl IntoChildren) -> Node {
	let current = props.clamped_value();
	let offset = MAX - current.unwrap_or(0.0);

	let indicator = span((
		data_slot("progress-indicator"),
		data("state", props.state()),
		current.map(|v| data("value", v.to_string())),
		data("max", MAX.to_string()),
		class("bg-primary block h-full w-full flex-1 transition-all"),
		style(format!("transform: translateX(-{offset}%);")),
	));

	compose(
		"div",
		(
			role("progressbar"),
			data_slot("progress"),
			aria("valuemin", "0"),
			aria("valuemax", MAX.to_string()),
			current.map(|v| aria("valuenow", v.to_string())),
			data("state", props.state()),
			current.map(|v| data("value", v.to_string())),
			data("max", MAX.to_string()),
			class(cn!(
				"bg-primary/20 relative h-2 w-full overflow-hidden rounded-full",
				props.class
			)),
			indicator,
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
	fn test_progress_snapshot() {
		assert_snapshot!(
			progress(ProgressProps::new().value(60.0), ()).render_to_string(),
			@r#"<div role="progressbar" data-slot="progress" aria-valuemin="0" aria-valuemax="100" aria-valuenow="60" data-state="loading" data-value="60" data-max="100" class="bg-primary/20 relative h-2 w-full overflow-hidden rounded-full"><span data-slot="progress-indicator" data-state="loading" data-value="60" data-max="100" class="bg-primary block h-full w-full flex-1 transition-all" style="transform: translateX(-40%);"></span></div>"#
		);
	}

	#[rstest]
	#[case(Some(100.0), "complete")]
	#[case(Some(250.0), "complete")]
	#[case(Some(0.0), "loading")]
	#[case(Some(-5.0), "loading")]
	#[case(None, "indeterminate")]
	#[case(Some(f64::NAN), "indeterminate")]
	fn test_state(#[case] value: Option<f64>, #[case] expected: &str) {
		let props = ProgressProps { value, ..ProgressProps::default() };
		assert_eq!(props.state(), expected);
	}

	#[rstest]
	#[case(150.0, "100", "translateX(-0%)")]
	#[case(-20.0, "0", "translateX(-100%)")]
	#[case(12.5, "12.5", "translateX(-87.5%)")]
	fn test_value_is_clamped(#[case] value: f64, #[case] now: &str, #[case] transform: &str) {
		let html = progress(ProgressProps::new().value(value), ()).render_to_string();
		assert!(html.contains(&format!(r#"aria-valuenow="{now}""#)));
		assert!(html.contains(transform));
	}

	#[rstest]
	fn test_indeterminate_has_no_valuenow() {
		let html = progress(ProgressProps::new(), ()).render_to_string();
		assert!(!html.contains("aria-valuenow"));
		assert!(!html.contains("data-value"));
		assert!(html.contains(r#"data-state="indeterminate""#));
		assert!(html.contains("translateX(-100%)"));
	}
}
