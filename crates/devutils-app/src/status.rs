// Rust guideline compliant 2026-10-17

//! Attachment status of messages and files, for display next to them.

use crate::error::Result;
use devutils_core::{resolve_for, Config, HistoryProvider, LinkAction};
use serde::Serialize;

/// Class that messages and files are attached to.
pub const ISSUE_CLASS: &str = "issue";

/// Where an entity is attached, derived from its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentStatus {
    /// Class of the inspected entity.
    pub class: String,
    /// Id of the inspected entity.
    pub node_id: String,
    /// Last link or unlink, if any.
    pub action: Option<LinkAction>,
    /// Issue the entity is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    /// Link to that issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_url: Option<String>,
    /// One-line description.
    pub summary: String,
}

/// Computes the attachment status of `class`/`node_id`.
///
/// A history with no link or unlink events is not an error; the status then
/// carries no action and no issue link.
///
/// # Errors
///
/// Returns an error if the history cannot be read or is malformed.
pub fn attachment_status<P>(
    history: &P,
    config: &Config,
    class: &str,
    node_id: &str,
) -> Result<AttachmentStatus>
where
    P: HistoryProvider + ?Sized,
{
    let resolution = resolve_for(history, class, node_id)?;
    let entity = format!("{class}{node_id}");

    let (issue_url, summary) = match (resolution.action, resolution.related_id.as_deref()) {
        (Some(LinkAction::Link), Some(issue_id)) => (
            Some(format!("{}{}{}", config.tracker_web, ISSUE_CLASS, issue_id)),
            format!("{entity} is attached to {ISSUE_CLASS}{issue_id}"),
        ),
        (Some(LinkAction::Unlink), _) => (
            None,
            format!("{entity} was removed from the {ISSUE_CLASS} it was attached to"),
        ),
        _ => (None, format!("{entity} has no link history")),
    };

    Ok(AttachmentStatus {
        class: class.to_string(),
        node_id: node_id.to_string(),
        action: resolution.action,
        issue_id: resolution.related_id,
        issue_url,
        summary,
    })
}
