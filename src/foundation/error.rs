/// Convenience result type used across glitchswap.
pub type GlitchswapResult<T> = Result<T, GlitchswapError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlitchswapError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host cannot provide a pixel-addressable drawing surface.
    #[error("unsupported surface: {0}")]
    UnsupportedSurface(String),

    /// Content could not be loaded for a section.
    #[error("content error: {0}")]
    Content(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlitchswapError {
    /// Build a [`GlitchswapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlitchswapError::UnsupportedSurface`] value.
    pub fn unsupported_surface(msg: impl Into<String>) -> Self {
        Self::UnsupportedSurface(msg.into())
    }

    /// Build a [`GlitchswapError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`GlitchswapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
