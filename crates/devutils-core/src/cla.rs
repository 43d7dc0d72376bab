// Rust guideline compliant 2026-10-17

//! Contributor agreement lookup by GitHub username.

use crate::{Result, User};
use serde::{Serialize, Serializer};

/// CLA status per requested GitHub username, in request order.
///
/// Each name appears once, at the position it was first requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaStatuses {
    entries: Vec<(String, Option<bool>)>,
}

impl ClaStatuses {
    /// Returns the status recorded for `name`, if it was requested.
    pub fn get(&self, name: &str) -> Option<Option<bool>> {
        self.entries
            .iter()
            .find(|(requested, _)| requested == name)
            .map(|(_, status)| *status)
    }

    /// Requested names and their statuses in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<bool>)> + '_ {
        self.entries
            .iter()
            .map(|(name, status)| (name.as_str(), *status))
    }

    /// Number of distinct requested names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no names were requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ClaStatuses {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, status)| (name, status)))
    }
}

fn status_of(name: &str, users: &[User]) -> Option<bool> {
    let mut matches = users.iter().filter(|user| {
        user.github
            .as_deref()
            .is_some_and(|github| github.eq_ignore_ascii_case(name))
    });
    matches
        .next()
        .map(|first| first.contrib_form || matches.any(|user| user.contrib_form))
}

/// Looks up the contributor-agreement status of each GitHub username.
///
/// The status is `Some(true)` if at least one user with that GitHub username
/// signed the agreement, `Some(false)` if matching users exist but none
/// signed, and `None` if no user has that GitHub username. Usernames are
/// compared ASCII case-insensitively.
///
/// # Arguments
///
/// * `names` - GitHub usernames to look up
/// * `users` - Users to search
pub fn cla_statuses<'a, I>(names: I, users: &[User]) -> ClaStatuses
where
    I: IntoIterator<Item = &'a str>,
{
    let mut statuses = ClaStatuses::default();
    for name in names {
        if statuses.get(name).is_none() {
            statuses
                .entries
                .push((name.to_string(), status_of(name, users)));
        }
    }
    statuses
}

/// Renders the CLA statuses of a comma-separated list of GitHub usernames
/// as a compact JSON object.
///
/// Keys follow the order the names were given in; a repeated name keeps its
/// first position. Values are `true`, `false` or `null` as described in
/// [`cla_statuses`].
///
/// # Arguments
///
/// * `names` - Comma-separated GitHub usernames, e.g. `octocat,hubot`
/// * `users` - Users to search
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn clas_as_json(names: &str, users: &[User]) -> Result<String> {
    let statuses = cla_statuses(names.split(','), users);
    Ok(serde_json::to_string(&statuses)?)
}
