/// Convenience result type used across the crate.
pub type ScratchResult<T> = Result<T, ScratchError>;

/// Top-level error taxonomy used by surface APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScratchError {
    /// Invalid host-provided options or style data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while painting or compositing raster data.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing styles and scripts.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScratchError {
    /// Build a [`ScratchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScratchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScratchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
