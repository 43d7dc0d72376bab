// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils cla-check` command.

use crate::Output;
use devutils_app::{AppError, Result, TrackerContext};
use devutils_core::cla_statuses;
use std::path::Path;

/// Prints the CLA report for a comma-separated list of GitHub usernames.
///
/// The report is a JSON object in both output modes, keyed in the order the
/// names were given.
///
/// # Errors
///
/// Returns an error if the tracker directory does not exist or the users
/// cannot be read.
pub fn execute(tracker_dir: Option<&Path>, names: &str, out: &Output) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let users = context.open_db()?.load_users()?;

    let statuses = cla_statuses(names.split(','), &users);
    let report = serde_json::to_string(&statuses).map_err(|e| AppError::Core(e.into()))?;
    out.emit(&statuses, || report.clone())
}
