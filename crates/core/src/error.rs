//! Core Error Types
//!
//! Defines the foundational error types used across the TalentScout workspace.
//! These error types are dependency-free (only thiserror + std) to keep the core
//! crate lightweight.
//!
//! The application crate extends these with gateway and session-state variants
//! that depend on the LLM provider layer.

use thiserror::Error;

/// Candidate-submitted profile fields failed validation.
///
/// Always recovered locally: the message is shown back to the candidate so
/// they can correct the form. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more mandatory fields are blank. Lists every one of them.
    #[error("Please fill in all mandatory fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please enter at least one technology in the tech stack")]
    EmptyTechStack,

    /// Years of experience was not a whole number in the accepted range
    #[error("Please enter a valid number of years of experience: {0}")]
    InvalidExperience(String),
}

impl ValidationError {
    /// Names of the missing mandatory fields, empty for other variants
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Core error type for the TalentScout workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Candidate profile validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
