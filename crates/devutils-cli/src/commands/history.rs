// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils history` command.

use crate::Output;
use chrono::DateTime;
use devutils_app::{AppError, Result, TrackerContext};
use devutils_core::{is_history_ok, ChangeEvent, HistoryProvider, Request};
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Prints the audit history of `class`/`node_id`.
///
/// When `viewer` is given, the history is only shown if that user may see
/// it.
///
/// # Errors
///
/// Returns an error if:
/// - The tracker directory does not exist
/// - The viewer may not see the history
/// - The history cannot be read
pub fn execute(
    tracker_dir: Option<&Path>,
    class: &str,
    node_id: &str,
    viewer: Option<&str>,
    out: &Output,
) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let config = context.load_config()?;
    let db = context.open_db()?;

    if let Some(viewer) = viewer {
        let request = Request::new(viewer, class, Some(node_id.to_string()));
        if !is_history_ok(&request, &db, &config)? {
            return Err(AppError::PermissionDenied(format!(
                "user{viewer} may not view the history of {class}{node_id}"
            )));
        }
    }

    let history = db.get_history(class, node_id)?;
    out.emit(&history, || format_history(&history))
}

/// Formats a history as a table, oldest entry first.
pub fn format_history(history: &[ChangeEvent]) -> String {
    if history.is_empty() {
        return "No history found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec!["Event", "Date", "Actor", "Action", "Detail"]);
    for event in history {
        let detail = event
            .detail
            .as_ref()
            .map(|d| format!("{}{} ({})", d.class, d.node_id, d.property))
            .unwrap_or_default();
        builder.push_record(vec![
            event.event_id.clone(),
            format_timestamp(event.timestamp),
            event.actor_id.clone(),
            event.action.to_string(),
            detail,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Formats a Unix timestamp the way the tracker prints dates.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d.%H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
