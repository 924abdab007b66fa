//! Error types for kanboard
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, bad config, unknown labels)
//! - 3: Data contract breach (invalid priority from the source, empty user name)
//! - 4: Operation failed (fetch, IO, lock, serialization)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the kanboard CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const DATA_CONTRACT: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for kanboard operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown priority label: {0}")]
    UnknownLabel(String),

    // Data contract breaches (exit code 3)
    #[error("Invalid priority {0} (expected 0-4)")]
    InvalidPriority(i64),

    #[error("User name is empty")]
    EmptyName,

    // Operation failures (exit code 4)
    #[error("Fetch from {origin} failed: {message}")]
    Fetch { origin: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::InvalidConfig(_) | Error::UnknownLabel(_) => {
                exit_codes::USER_ERROR
            }

            Error::InvalidPriority(_) | Error::EmptyName => exit_codes::DATA_CONTRACT,

            Error::Fetch { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::LockFailed(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Short machine-readable category for this error
    pub fn kind(&self) -> &'static str {
        match self.exit_code() {
            exit_codes::USER_ERROR => "user_error",
            exit_codes::DATA_CONTRACT => "data_contract",
            _ => "operation_failed",
        }
    }

    /// Structured details for JSON error output, when the error carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidPriority(value) => Some(serde_json::json!({ "priority": value })),
            Error::UnknownLabel(label) => Some(serde_json::json!({ "label": label })),
            Error::Fetch { origin, .. } => Some(serde_json::json!({ "source": origin })),
            Error::LockFailed(path) => Some(serde_json::json!({ "path": path })),
            _ => None,
        }
    }
}

/// Result type alias for kanboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}
