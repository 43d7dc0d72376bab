// Rust guideline compliant 2026-10-17

//! Form actions that answer with a redirect.

use crate::{Config, Issue, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Lookup of issue ids by status.
pub trait IssueIndex {
    /// Returns the ids of all issues whose status node id is `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the issues cannot be read.
    fn issue_ids_with_status(&self, status: &str) -> Result<Vec<String>>;
}

impl IssueIndex for [Issue] {
    fn issue_ids_with_status(&self, status: &str) -> Result<Vec<String>> {
        Ok(self
            .iter()
            .filter(|issue| issue.status == status)
            .map(|issue| issue.id.clone())
            .collect())
    }
}

impl IssueIndex for Vec<Issue> {
    fn issue_ids_with_status(&self, status: &str) -> Result<Vec<String>> {
        self.as_slice().issue_ids_with_status(status)
    }
}

/// Where the browser is sent after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Absolute target URL.
    pub url: String,
}

/// Everything an action may consult while handling a request.
pub struct ActionContext<'a> {
    /// Tracker configuration.
    pub config: &'a Config,
    /// Issue lookup.
    pub issues: &'a dyn IssueIndex,
}

/// A named form action.
pub trait Action: Send + Sync {
    /// Handles the action and returns the redirect target.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker data cannot be read.
    fn handle(&self, ctx: &ActionContext<'_>) -> Result<Redirect>;
}

/// Redirects to a randomly chosen open issue.
///
/// Each action owns its generator so its state is not shared with any other
/// user of randomness in the process.
pub struct RandomIssueAction {
    rng: Mutex<StdRng>,
}

impl RandomIssueAction {
    /// Creates an action seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an action with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomIssueAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for RandomIssueAction {
    fn handle(&self, ctx: &ActionContext<'_>) -> Result<Redirect> {
        let web = &ctx.config.tracker_web;
        let issue_ids = ctx.issues.issue_ids_with_status(&ctx.config.open_status_id)?;

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let url = match issue_ids.choose(&mut *rng) {
            Some(id) => format!("{}issue{}", web, id),
            None => {
                tracing::info!("no open issues, redirecting to tracker root");
                web.clone()
            }
        };
        Ok(Redirect { url })
    }
}
