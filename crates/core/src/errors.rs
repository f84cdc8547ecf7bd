//! Core error types for Grip.
//!
//! Validation errors are the only kind a caller is expected to act on;
//! the server apps map them to 400 responses and everything else to a
//! generic unexpected-error response.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the opportunity pipeline and ledger ingestion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing. The messages are
/// the exact strings callers see in 400 bodies, so changing them is an
/// API change.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether this error should surface as a caller mistake (HTTP 400)
    /// rather than a server fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
