//! Response Types
//!
//! Standard response types for all commands.

use serde::{Deserialize, Serialize};

use crate::models::session::SessionView;
use crate::services::interview::TurnOutcome;

/// Generic command response for all commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response with message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Convert back into a `Result`, for callers that prefer `?`
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "command returned no data".to_string())),
        }
    }
}

impl<T> From<Result<T, crate::utils::error::AppError>> for CommandResponse<T> {
    fn from(result: Result<T, crate::utils::error::AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Result of one candidate message together with the refreshed session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub outcome: TurnOutcome,
    pub session: SessionView,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub provider: String,
    pub model: String,
    /// Whether the language model backend accepted the credential
    pub provider_reachable: bool,
    pub active_sessions: usize,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "talent-scout".to_string(),
            provider: String::new(),
            model: String::new(),
            provider_reachable: false,
            active_sessions: 0,
        }
    }
}
