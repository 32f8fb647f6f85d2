//! Theme system for customizing component appearance
//!
//! Components only reference semantic utilities (`bg-primary`,
//! `text-muted-foreground`, `border-input`, ...). Those resolve through CSS
//! custom properties, which a [`Theme`] emits for the light palette (`:root`)
//! and the dark palette (`.dark`).
//!
//! Themes can be loaded from TOML. Every key is optional and overrides the
//! built-in neutral palette:
//!
//! ```toml
//! radius = "0.5rem"
//!
//! [light]
//! primary = "oklch(0.55 0.2 260)"
//!
//! [dark]
//! primary = "oklch(0.7 0.15 260)"
//! ```

use std::fmt::Write as _;
use std::io;

use forma_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;

macro_rules! palette {
	($($(#[$meta:meta])* $field:ident => $var:literal),+ $(,)?) => {
		/// One colour scheme's design tokens
		#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
		pub struct Palette {
			$($(#[$meta])* pub $field: String,)+
		}

		/// Partial palette as read from a theme file
		#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
		#[serde(default, deny_unknown_fields)]
		pub struct PaletteOverrides {
			$($(#[$meta])* pub $field: Option<String>,)+
		}

		impl Palette {
			/// `(custom property, value)` pairs in declaration order.
			pub fn tokens(&self) -> Vec<(&'static str, &str)> {
				vec![$(($var, self.$field.as_str())),+]
			}

			/// Replaces every token the overrides set.
			pub fn apply(&mut self, overrides: PaletteOverrides) {
				$(if let Some(v) = overrides.$field {
					self.$field = v;
				})+
			}
		}
	};
}

palette! {
	/// Page background
	background => "--background",
	/// Default text
	foreground => "--foreground",
	/// Card surface
	card => "--card",
	/// Text on cards
	card_foreground => "--card-foreground",
	/// Popover surface
	popover => "--popover",
	/// Text on popovers
	popover_foreground => "--popover-foreground",
	/// Primary actions
	primary => "--primary",
	/// Text on primary
	primary_foreground => "--primary-foreground",
	/// Secondary actions
	secondary => "--secondary",
	/// Text on secondary
	secondary_foreground => "--secondary-foreground",
	/// Muted surfaces
	muted => "--muted",
	/// Muted text
	muted_foreground => "--muted-foreground",
	/// Hover and selection accents
	accent => "--accent",
	/// Text on accents
	accent_foreground => "--accent-foreground",
	/// Destructive actions
	destructive => "--destructive",
	/// Text on destructive
	destructive_foreground => "--destructive-foreground",
	/// Borders
	border => "--border",
	/// Form control borders
	input => "--input",
	/// Focus rings
	ring => "--ring",
}

impl Palette {
	/// Neutral light palette
	pub fn light() -> Self {
		Self {
			background: "oklch(1 0 0)".into(),
			foreground: "oklch(0.145 0 0)".into(),
			card: "oklch(1 0 0)".into(),
			card_foreground: "oklch(0.145 0 0)".into(),
			popover: "oklch(1 0 0)".into(),
			popover_foreground: "oklch(0.145 0 0)".into(),
			primary: "oklch(0.205 0 0)".into(),
			primary_foreground: "oklch(0.985 0 0)".into(),
			secondary: "oklch(0.97 0 0)".into(),
			secondary_foreground: "oklch(0.205 0 0)".into(),
			muted: "oklch(0.97 0 0)".into(),
			muted_foreground: "oklch(0.556 0 0)".into(),
			accent: "oklch(0.97 0 0)".into(),
			accent_foreground: "oklch(0.205 0 0)".into(),
			destructive: "oklch(0.577 0.245 27.325)".into(),
			destructive_foreground: "oklch(0.985 0 0)".into(),
			border: "oklch(0.922 0 0)".into(),
			input: "oklch(0.922 0 0)".into(),
			ring: "oklch(0.708 0 0)".into(),
		}
	}

	/// Neutral dark palette
	pub fn dark() -> Self {
		Self {
			background: "oklch(0.145 0 0)".into(),
			foreground: "oklch(0.985 0 0)".into(),
			card: "oklch(0.205 0 0)".into(),
			card_foreground: "oklch(0.985 0 0)".into(),
			popover: "oklch(0.205 0 0)".into(),
			popover_foreground: "oklch(0.985 0 0)".into(),
			primary: "oklch(0.922 0 0)".into(),
			primary_foreground: "oklch(0.205 0 0)".into(),
			secondary: "oklch(0.269 0 0)".into(),
			secondary_foreground: "oklch(0.985 0 0)".into(),
			muted: "oklch(0.269 0 0)".into(),
			muted_foreground: "oklch(0.708 0 0)".into(),
			accent: "oklch(0.269 0 0)".into(),
			accent_foreground: "oklch(0.985 0 0)".into(),
			destructive: "oklch(0.704 0.191 22.216)".into(),
			destructive_foreground: "oklch(0.985 0 0)".into(),
			border: "oklch(1 0 0 / 10%)".into(),
			input: "oklch(1 0 0 / 15%)".into(),
			ring: "oklch(0.556 0 0)".into(),
		}
	}
}

/// Theme configuration
///
/// Light and dark design tokens plus the base corner radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
	/// Base corner radius (`--radius`)
	pub radius: String,
	/// Tokens under `:root`
	pub light: Palette,
	/// Tokens under `.dark`
	pub dark: Palette,
}

/// Theme file contents
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
	radius: Option<String>,
	light: PaletteOverrides,
	dark: PaletteOverrides,
}

impl Theme {
	/// Create the default neutral theme
	pub fn default_theme() -> Self {
		Self {
			radius: "0.625rem".into(),
			light: Palette::light(),
			dark: Palette::dark(),
		}
	}

	/// Loads a theme file, layering it over the default theme
	pub fn from_toml(source: &str) -> Result<Self> {
		let file: ThemeFile = toml::from_str(source)?;
		let mut theme = Self::default_theme();
		if let Some(radius) = file.radius {
			theme.radius = radius;
		}
		theme.light.apply(file.light);
		theme.dark.apply(file.dark);
		Ok(theme)
	}

	/// Convert theme to CSS variables
	pub fn to_css_variables(&self) -> String {
		let mut css = String::with_capacity(1024);
		css.push_str(":root {\n");
		// Writing into a String cannot fail.
		let _ = writeln!(css, "  --radius: {};", self.radius);
		write_tokens(&mut css, &self.light);
		css.push_str("}\n.dark {\n");
		write_tokens(&mut css, &self.dark);
		css.push('}');
		css
	}

	/// `<style>` element carrying [`Theme::to_css_variables`].
	///
	/// Token values are emitted unescaped; they must come from trusted
	/// configuration.
	pub fn style_node(&self) -> Node {
		element("style", unsafe_raw(self.to_css_variables()))
	}

	/// Writes [`Theme::style_node`] into `writer`.
	pub fn write_style<W: io::Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		self.style_node().render(writer)?;
		Ok(())
	}

	/// Builder method for primary color (light palette)
	pub fn primary(mut self, color: impl Into<String>) -> Self {
		self.light.primary = color.into();
		self
	}

	/// Builder method for secondary color (light palette)
	pub fn secondary(mut self, color: impl Into<String>) -> Self {
		self.light.secondary = color.into();
		self
	}

	/// Builder method for border radius
	pub fn radius(mut self, radius: impl Into<String>) -> Self {
		self.radius = radius.into();
		self
	}

	/// Builder method for the dark palette
	pub fn dark(mut self, palette: Palette) -> Self {
		self.dark = palette;
		self
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

fn write_tokens(css: &mut String, palette: &Palette) {
	for (var, value) in palette.tokens() {
		let _ = writeln!(css, "  {var}: {value};");
	}
}
