// Rust guideline compliant 2026-10-17

//! Output formatting for CLI commands.

use devutils_app::{AppError, ErrorEnvelope, Result, SuccessEnvelope};
use serde::Serialize;

/// Chooses between plain text and JSON envelopes for one subcommand.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
    command: &'static str,
}

impl Output {
    /// Creates an output for `command` in the given mode.
    pub fn new(json: bool, command: &'static str) -> Self {
        Self { json, command }
    }

    /// Returns true in JSON mode.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Name of the subcommand being answered.
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Renders a command result.
    ///
    /// JSON mode wraps `result` in a success envelope; plain mode uses
    /// `plain` as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    pub fn render<T: Serialize>(&self, result: &T, plain: impl FnOnce() -> String) -> Result<String> {
        if self.json {
            serde_json::to_string_pretty(&SuccessEnvelope::new(self.command, result))
                .map_err(|e| AppError::Core(e.into()))
        } else {
            Ok(plain())
        }
    }

    /// Prints a command result to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    pub fn emit<T: Serialize>(&self, result: &T, plain: impl FnOnce() -> String) -> Result<()> {
        println!("{}", self.render(result, plain)?);
        Ok(())
    }

    /// Renders an error for the user.
    pub fn render_error(&self, error: &anyhow::Error) -> String {
        if !self.json {
            return format!("Error: {error:#}");
        }
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app) => ErrorEnvelope::from_error(self.command, app),
            None => ErrorEnvelope::unexpected(self.command, format!("{error:#}")),
        };
        serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| {
            serde_json::json!({
                "status": "error",
                "command": self.command,
                "code": "unknown",
                "message": error.to_string(),
            })
            .to_string()
        })
    }
}
