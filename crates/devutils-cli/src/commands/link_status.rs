// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils link-status` command.
//!
//! Reports whether a message or file is attached to an issue, based on the
//! last link or unlink in its history.

use crate::Output;
use devutils_app::{attachment_status, Result, TrackerContext};
use std::path::Path;

/// Prints the attachment status of `class`/`node_id`.
///
/// # Errors
///
/// Returns an error if:
/// - The tracker directory does not exist
/// - The history cannot be read or is malformed
pub fn execute(tracker_dir: Option<&Path>, class: &str, node_id: &str, out: &Output) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let config = context.load_config()?;
    let db = context.open_db()?;

    let status = attachment_status(&db, &config, class, node_id)?;
    out.emit(&status, || match &status.issue_url {
        Some(url) => format!("{}\n  {}", status.summary, url),
        None => status.summary.clone(),
    })
}
