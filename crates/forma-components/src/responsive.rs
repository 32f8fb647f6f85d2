//! Responsive design utilities
//!
//! Tailwind's mobile-first breakpoints: unprefixed classes apply everywhere,
//! `md:` classes from 768px up, and so on.

use forma_core::class::cn;

/// Responsive breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
	/// Small (≥ 640px)
	Sm,
	/// Medium (≥ 768px)
	Md,
	/// Large (≥ 1024px)
	Lg,
	/// Extra large (≥ 1280px)
	Xl,
	/// Extra extra large (≥ 1536px)
	Xxl,
}

impl Breakpoint {
	/// Every breakpoint, narrowest first
	pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

	/// Get minimum width in pixels for this breakpoint
	pub fn min_width(&self) -> u32 {
		match self {
			Self::Sm => 640,
			Self::Md => 768,
			Self::Lg => 1024,
			Self::Xl => 1280,
			Self::Xxl => 1536,
		}
	}

	/// Convert breakpoint to its variant prefix (without the colon)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
			Self::Xxl => "2xl",
		}
	}

	/// Prefixes every class token: `Md.prefix("flex gap-2")` is
	/// `"md:flex md:gap-2"`.
	pub fn prefix(&self, classes: &str) -> String {
		let prefix = self.as_str();
		cn(classes
			.split_ascii_whitespace()
			.map(|token| format!("{prefix}:{token}")))
	}
}

/// Responsive value that can vary by breakpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveValue<T> {
	/// Below the first breakpoint and up
	pub base: Option<T>,
	/// Small
	pub sm: Option<T>,
	/// Medium
	pub md: Option<T>,
	/// Large
	pub lg: Option<T>,
	/// Extra large
	pub xl: Option<T>,
	/// Extra extra large
	pub xxl: Option<T>,
}

impl<T> ResponsiveValue<T> {
	/// Create new responsive value with a base
	pub fn new(base: T) -> Self {
		Self {
			base: Some(base),
			sm: None,
			md: None,
			lg: None,
			xl: None,
			xxl: None,
		}
	}

	/// Set small breakpoint value
	pub fn sm(mut self, value: T) -> Self {
		self.sm = Some(value);
		self
	}

	/// Set medium breakpoint value
	pub fn md(mut self, value: T) -> Self {
		self.md = Some(value);
		self
	}

	/// Set large breakpoint value
	pub fn lg(mut self, value: T) -> Self {
		self.lg = Some(value);
		self
	}

	/// Set extra large breakpoint value
	pub fn xl(mut self, value: T) -> Self {
		self.xl = Some(value);
		self
	}

	/// Set extra extra large breakpoint value
	pub fn xxl(mut self, value: T) -> Self {
		self.xxl = Some(value);
		self
	}

	/// Value set for `breakpoint`, if any
	pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
		match breakpoint {
			Breakpoint::Sm => self.sm.as_ref(),
			Breakpoint::Md => self.md.as_ref(),
			Breakpoint::Lg => self.lg.as_ref(),
			Breakpoint::Xl => self.xl.as_ref(),
			Breakpoint::Xxl => self.xxl.as_ref(),
		}
	}

	/// Maps every value to classes and prefixes them per breakpoint.
	pub fn to_classes_with(&self, mut to_class: impl FnMut(&T) -> String) -> String {
		let mut parts = Vec::with_capacity(6);
		if let Some(base) = &self.base {
			parts.push(to_class(base));
		}
		for breakpoint in Breakpoint::ALL {
			if let Some(value) = self.get(breakpoint) {
				parts.push(breakpoint.prefix(&to_class(value)));
			}
		}
		cn(parts)
	}
}

impl<T: AsRef<str>> ResponsiveValue<T> {
	/// Class string with base classes first, then each breakpoint's classes
	/// with its prefix.
	pub fn to_classes(&self) -> String {
		self.to_classes_with(|v| v.as_ref().to_owned())
	}
}
