/// Convenience result type used across skintex.
pub type SkinResult<T> = Result<T, SkinError>;

/// Top-level error taxonomy used by loader and surface APIs.
#[derive(thiserror::Error, Debug)]
pub enum SkinError {
    /// Skin source is neither square (modern) nor exactly 2:1 (legacy).
    #[error("invalid skin dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },

    /// Malformed arguments at the surface boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkinError {
    /// Build a [`SkinError::InvalidDimensions`] value.
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Build a [`SkinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
