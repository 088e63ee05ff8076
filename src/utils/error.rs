//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use talent_scout_core::{CoreError, ValidationError};
use talent_scout_llm::LlmError;
use thiserror::Error;

/// Failures of the Language Model Gateway.
///
/// Any of these aborts the operation in progress; the session it was
/// operating on is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// No credential was available for the configured provider
    #[error("Language model is not configured: {0}")]
    NotConfigured(String),

    /// The call did not complete within the configured limit
    #[error("Language model call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The provider returned an error
    #[error("Language model call failed: {0}")]
    Upstream(#[from] LlmError),
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Candidate profile validation errors, shown to the candidate as-is
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Language model gateway errors
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not allowed in the session's current stage
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => Self::Validation(e),
            CoreError::Io(e) => Self::Io(e),
            CoreError::Serialization(e) => Self::Serialization(e),
        }
    }
}

/// Convert AppError to a string suitable for command responses
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
