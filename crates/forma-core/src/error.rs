//! Error types for forma-core

use thiserror::Error;

/// Error returned when rendering a node tree fails.
///
/// A node tree itself is always renderable; the only failures come from the
/// output sink.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The `io::Write` sink rejected a write. Rendering stopped at that point.
	#[error("failed to write rendered HTML: {0}")]
	Writer(#[from] std::io::Error),

	/// A `fmt::Write` sink reported an error.
	#[error("formatter error while rendering HTML")]
	Format,
}

/// Error returned when a variant table cannot be loaded.
#[derive(Debug, Error)]
pub enum VariantError {
	/// The JSON document does not describe a variant table.
	#[error("invalid variant table: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
