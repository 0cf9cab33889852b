//! Error types and handling
//!
//! Errors raised while handling a shield command, plus the shape they take
//! when sent back across the command channel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plugin-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShieldError {
    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("No window is attached to receive the command")]
    WindowUnavailable,

    #[error("Platform error: {0}")]
    Platform(String),
}

impl ShieldError {
    /// Stable code reported to the caller
    pub fn code(&self) -> &'static str {
        match self {
            ShieldError::UnrecognizedCommand(_) => "NOT_IMPLEMENTED",
            ShieldError::WindowUnavailable => "WINDOW_UNAVAILABLE",
            ShieldError::Platform(_) => "PLATFORM_ERROR",
        }
    }
}

/// Error response for frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<ShieldError> for ErrorResponse {
    fn from(error: ShieldError) -> Self {
        ErrorResponse {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Result type alias using ShieldError
pub type ShieldResult<T> = Result<T, ShieldError>;
