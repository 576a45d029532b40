/// Convenience result type used across the crate.
pub type StageResult<T> = Result<T, StageError>;

/// Top-level error taxonomy used by boundary APIs.
///
/// Only construction and loading can fail. Per-frame evaluation never returns an error.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    /// Invalid page data (duplicate ids, bad metrics, bad margins).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid engine configuration (smooth scroll, range maps).
    #[error("config error: {0}")]
    Config(String),

    /// Invalid animation parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Build a [`StageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StageError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StageError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
