/// Convenience result type used across the crate.
pub type ParallaxResult<T> = Result<T, ParallaxError>;

/// Top-level error taxonomy used by the tracing APIs.
#[derive(thiserror::Error, Debug)]
pub enum ParallaxError {
    /// Malformed input data (grid shape, coordinates).
    #[error("validation error: {0}")]
    Validation(String),

    /// Curve or run parameters that violate a precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failures while driving the multi-frame trace.
    #[error("trace error: {0}")]
    Trace(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ParallaxError {
    /// Build a [`ParallaxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ParallaxError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`ParallaxError::Trace`] value.
    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace(msg.into())
    }

    /// Build a [`ParallaxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ParallaxError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
