//! Error types for the 2-d tree.

use thiserror::Error;

/// Errors raised while constructing tree inputs.
///
/// Tree operations themselves never fail; invalid values are rejected when
/// the [`Point`](crate::Point), [`Rect`](crate::Rect) or
/// [`RenderConfig`](crate::RenderConfig) carrying them is built.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KdTreeError {
    /// A coordinate, bound or setting outside its accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for fallible constructors.
pub type Result<T> = std::result::Result<T, KdTreeError>;
