// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils random-issue` command.

use crate::Output;
use devutils_app::{Result, TrackerContext};
use devutils_core::{Action, ActionContext, RandomIssueAction, Registry};
use std::path::Path;

/// Prints the URL the `random` action redirects to.
///
/// With a seed the choice is reproducible; otherwise the registered action
/// is used.
///
/// # Errors
///
/// Returns an error if the tracker directory does not exist or the issues
/// cannot be read.
pub fn execute(tracker_dir: Option<&Path>, seed: Option<u64>, out: &Output) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let config = context.load_config()?;
    let db = context.open_db()?;
    let ctx = ActionContext {
        config: &config,
        issues: &db,
    };

    let redirect = match seed {
        Some(seed) => RandomIssueAction::seeded(seed).handle(&ctx)?,
        None => Registry::initialized()?.action("random")?.handle(&ctx)?,
    };

    out.emit(&serde_json::json!({ "redirect": redirect.url }), || {
        redirect.url.clone()
    })
}
