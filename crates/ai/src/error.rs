//! AI error types.

use grip_core::Error as CoreError;
use thiserror::Error;

/// Errors from LLM access and document loading.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Document loading or text extraction failed.
    #[error("Document error: {0}")]
    Document(String),

    /// Core error from grip-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is a caller mistake (HTTP 400) rather than a
    /// provider or server fault.
    pub fn is_validation(&self) -> bool {
        match self {
            AiError::InvalidInput(_) => true,
            AiError::Core(core) => core.is_validation(),
            _ => false,
        }
    }
}
