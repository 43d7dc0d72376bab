// Rust guideline compliant 2026-10-17

//! Error types for the tracker devutils core library.

use thiserror::Error;

/// Result type alias for devutils operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for devutils operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A history event violates the audit-log contract.
    #[error("Malformed event {event_id}: {reason}")]
    MalformedEvent {
        /// Identifier of the offending event.
        event_id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Tracker record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid tracker record.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A utility or action name was registered twice.
    #[error("Already registered: {0}")]
    DuplicateRegistration(String),

    /// No utility or action is registered under the name.
    #[error("Unknown utility: {0}")]
    UnknownUtility(String),
}
