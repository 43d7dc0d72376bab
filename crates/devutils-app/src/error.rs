// Rust guideline compliant 2026-10-17

//! Error handling for tracker devutils application services.

use devutils_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested entity was not found.
    NotFound,
    /// A history event broke the audit-log contract.
    MalformedEvent,
    /// A stored record failed validation.
    ValidationError,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading or writing tracker data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The tracker directory has not been initialized.
    TrackerNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// The requester may not see the data.
    PermissionDenied,
    /// A registry lookup or registration failed.
    RegistryError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Tracker directory is missing.
    #[error("Tracker directory not initialized at {path}. Run 'devutils init' first.")]
    TrackerNotInitialized {
        /// Path where the tracker directory was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requester may not see the requested data.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::TrackerNotInitialized { .. } => ErrorCode::TrackerNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::PermissionDenied(_) => ErrorCode::PermissionDenied,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::MalformedEvent { .. } => ErrorCode::MalformedEvent,
                CoreError::InvalidRecord(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::DuplicateRegistration(_) | CoreError::UnknownUtility(_) => {
                    ErrorCode::RegistryError
                }
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::TrackerNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::MalformedEvent { event_id, reason }) => {
                Some(serde_json::json!({
                    "event_id": event_id,
                    "reason": reason,
                }))
            }
            _ => None,
        }
    }
}
