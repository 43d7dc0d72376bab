// Rust guideline compliant 2026-10-17

//! JSON envelopes wrapping every command answer.
//!
//! Both envelopes name the command that produced them, so a template or
//! script consuming several answers can tell them apart:
//!
//! ```json
//! {"status":"ok","command":"link-status","result":{...}}
//! {"status":"error","command":"history","code":"permission_denied","message":"..."}
//! ```

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Envelope for a successful command.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<'a, T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Subcommand that produced the result.
    pub command: &'a str,
    /// Command result.
    pub result: T,
}

impl<'a, T> SuccessEnvelope<'a, T> {
    /// Wraps the result of `command`.
    #[must_use]
    pub fn new(command: &'a str, result: T) -> Self {
        Self {
            status: "ok",
            command,
            result,
        }
    }
}

/// Envelope for a failed command.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    /// Always `"error"`.
    pub status: &'static str,
    /// Subcommand that failed.
    pub command: &'a str,
    /// Stable error code.
    pub code: ErrorCode,
    /// Message for humans.
    pub message: String,
    /// Event id, path or similar context, when the error has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl<'a> ErrorEnvelope<'a> {
    /// Describes an application error raised by `command`.
    #[must_use]
    pub fn from_error(command: &'a str, error: &AppError) -> Self {
        Self {
            status: "error",
            command,
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }

    /// Describes an error that is not an [`AppError`].
    #[must_use]
    pub fn unexpected(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            command,
            code: ErrorCode::Unknown,
            message: message.into(),
            details: None,
        }
    }
}
