//! Error types for forma-components

use forma_core::RenderError;
use thiserror::Error;

/// Error type for component operations
///
/// Component factories themselves never fail: unknown keys and odd numbers
/// degrade to defaults. These errors come from the strict entry points
/// (`str::parse` on key enums, theme loading, writing to a sink).
#[derive(Debug, Error)]
pub enum ComponentError {
	/// A theme file could not be parsed
	#[error("Invalid theme: {0}")]
	InvalidTheme(#[from] toml::de::Error),

	/// Invalid component property
	#[error("Invalid component property: {0}")]
	InvalidProperty(String),

	/// Rendering error
	#[error("Rendering error: {0}")]
	Render(#[from] RenderError),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
