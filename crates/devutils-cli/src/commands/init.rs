// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils init` command.

use crate::Output;
use devutils_app::{Result, TrackerContext};
use std::path::Path;

/// Creates the tracker directory with empty data files and a default config.
///
/// # Errors
///
/// Returns an error if the directory or its files cannot be created.
pub fn execute(tracker_dir: Option<&Path>, out: &Output) -> Result<()> {
    let context = TrackerContext::init(tracker_dir)?;
    let dir = context.tracker_dir().display().to_string();

    out.emit(&serde_json::json!({ "tracker_dir": dir }), || {
        format!(
            "✓ Tracker directory initialized at {dir}\n  - history.jsonl, users.jsonl, issues.jsonl\n  - config.toml"
        )
    })
}
