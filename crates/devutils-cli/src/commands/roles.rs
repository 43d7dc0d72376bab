// Rust guideline compliant 2026-10-17

//! Implementation of the role predicate commands.
//!
//! The predicates are looked up in the extension registry by the same names
//! the templates use.

use crate::Output;
use devutils_app::{AppError, Result, TrackerContext};
use devutils_core::registry::{RequestPredicate, UserPredicate};
use devutils_core::{Registry, Request, Util};
use std::path::Path;

fn request_predicate(registry: &Registry, name: &str) -> Result<RequestPredicate> {
    match registry.util(name)? {
        Util::RequestPredicate(predicate) => Ok(predicate),
        other => Err(AppError::InvalidInput(format!(
            "{name} is a {}, not a request predicate",
            other.kind()
        ))),
    }
}

fn user_predicate(registry: &Registry, name: &str) -> Result<UserPredicate> {
    match registry.util(name)? {
        Util::UserPredicate(predicate) => Ok(predicate),
        other => Err(AppError::InvalidInput(format!(
            "{name} is a {}, not a user predicate",
            other.kind()
        ))),
    }
}

/// Evaluates a request predicate (`is_history_ok`, `is_coordinator`).
///
/// # Errors
///
/// Returns an error if the tracker directory does not exist, the predicate
/// is unknown or the user cannot be found.
pub fn check_request(
    tracker_dir: Option<&Path>,
    name: &str,
    request: &Request,
    out: &Output,
) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let config = context.load_config()?;
    let db = context.open_db()?;
    let registry = Registry::initialized()?;

    let allowed = request_predicate(&registry, name)?(request, &db, &config)?;
    out.emit(&allowed, || allowed.to_string())
}

/// Evaluates a user predicate (`is_triager`).
///
/// # Errors
///
/// Returns an error if the tracker directory does not exist, the predicate
/// is unknown or the user cannot be found.
pub fn check_user(tracker_dir: Option<&Path>, name: &str, user_id: &str, out: &Output) -> Result<()> {
    let context = TrackerContext::discover(tracker_dir)?;
    let config = context.load_config()?;
    let db = context.open_db()?;
    let registry = Registry::initialized()?;

    let allowed = user_predicate(&registry, name)?(&db, user_id, &config)?;
    out.emit(&allowed, || allowed.to_string())
}
