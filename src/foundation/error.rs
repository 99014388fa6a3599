/// Convenience result type used across pointwise.
pub type PointwiseResult<T> = Result<T, PointwiseError>;

/// Errors raised while describing or building images.
///
/// Sampling an image never fails; every variant here comes from the scene layer.
#[derive(thiserror::Error, Debug)]
pub enum PointwiseError {
    /// A numeric parameter is outside the range a scene accepts.
    #[error("validation error: {0}")]
    Validation(String),

    /// The operation is not defined for the node's value type.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Errors when serializing or deserializing scene documents.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl PointwiseError {
    /// Build a [`PointwiseError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PointwiseError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`PointwiseError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PointwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
