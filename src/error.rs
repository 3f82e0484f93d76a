use thiserror::Error;

/// Errors that can occur when using an Eater
#[derive(Debug, Error)]
pub enum EaterError {
    /// A value of the wrong shape was handed to an operation that requires a
    /// mapping or a container
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The container could not be encoded as JSON text
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
