// Rust guideline compliant 2026-10-17

//! History scanning for link and unlink transitions.
//!
//! Messages and files are attached to issues through relation properties.
//! Every attach or detach is written to the entity's audit history as a
//! `link` or `unlink` event. This module walks such a history once and
//! reports the last of those transitions:
//!
//! - last was `link` → the id of the entity it was linked to
//! - last was `unlink` → no related entity, the relation no longer holds
//! - neither occurred → nothing
//!
//! The history is taken in the order the provider yields it. Events are never
//! re-sorted by timestamp.

use crate::{ActionKind, ChangeEvent, Error, LinkDetail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural change reported by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    /// The entity is attached to another entity.
    Link,
    /// The entity was detached and not attached again.
    Unlink,
}

impl LinkAction {
    /// Returns the action name as used in the audit log.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkAction::Link => "link",
            LinkAction::Unlink => "unlink",
        }
    }
}

impl fmt::Display for LinkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scanning a history.
///
/// `related_id` is only ever set together with [`LinkAction::Link`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResolution {
    /// Id of the entity on the other end of the last link.
    pub related_id: Option<String>,
    /// The last link or unlink transition, if any.
    pub action: Option<LinkAction>,
}

impl LinkResolution {
    /// A resolution for a history with no link or unlink events.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if the history had no link or unlink events.
    pub fn is_none(&self) -> bool {
        self.action.is_none()
    }
}

/// Source of entity histories.
///
/// Implementations return events in the order they should be traversed.
pub trait HistoryProvider {
    /// Returns the history of one entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    fn get_history(&self, class: &str, node_id: &str) -> Result<Vec<ChangeEvent>>;
}

/// Scanner state after consuming a prefix of the history.
enum ScanState<'a> {
    None,
    LastWasLink(&'a ChangeEvent),
    LastWasUnlink,
}

/// Resolves the last link or unlink transition in a history.
///
/// The whole history is consumed; whichever of `link` or `unlink` appears at
/// the later position wins. All other actions are ignored.
///
/// # Arguments
///
/// * `history` - Events of one entity in traversal order
///
/// # Returns
///
/// The related entity id and action of the winning event, or an empty
/// resolution if neither kind occurs.
///
/// # Errors
///
/// Returns [`Error::MalformedEvent`] if the winning event is a `link` without
/// a detail.
pub fn resolve_last_link_action(history: &[ChangeEvent]) -> Result<LinkResolution> {
    let mut state = ScanState::None;

    for event in history {
        match event.action {
            ActionKind::Unlink => state = ScanState::LastWasUnlink,
            ActionKind::Link => state = ScanState::LastWasLink(event),
            _ => {}
        }
    }

    match state {
        ScanState::None => Ok(LinkResolution::none()),
        ScanState::LastWasUnlink => Ok(LinkResolution {
            related_id: None,
            action: Some(LinkAction::Unlink),
        }),
        ScanState::LastWasLink(event) => {
            let LinkDetail { node_id, .. } =
                event.detail.as_ref().ok_or_else(|| Error::MalformedEvent {
                    event_id: event.event_id.clone(),
                    reason: "link event has no detail".to_string(),
                })?;
            tracing::debug!(event_id = %event.event_id, related_id = %node_id, "last link event");
            Ok(LinkResolution {
                related_id: Some(node_id.clone()),
                action: Some(LinkAction::Link),
            })
        }
    }
}

/// Fetches an entity's history from a provider and resolves it.
///
/// # Arguments
///
/// * `provider` - Audit-log provider
/// * `class` - Entity class (e.g. `msg`)
/// * `node_id` - Entity id
///
/// # Errors
///
/// Returns an error if the history cannot be read or is malformed.
pub fn resolve_for<P>(provider: &P, class: &str, node_id: &str) -> Result<LinkResolution>
where
    P: HistoryProvider + ?Sized,
{
    let history = provider.get_history(class, node_id)?;
    resolve_last_link_action(&history)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: &str, issue: &str) -> ChangeEvent {
        ChangeEvent::new(id, 1000, "4", ActionKind::Link)
            .with_detail(LinkDetail::new("issue", issue, "messages"))
    }

    fn unlink(id: &str, issue: &str) -> ChangeEvent {
        ChangeEvent::new(id, 1000, "4", ActionKind::Unlink)
            .with_detail(LinkDetail::new("issue", issue, "messages"))
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(resolve_last_link_action(&[]).unwrap(), LinkResolution::none());
    }

    #[test]
    fn test_later_position_wins_over_timestamp() {
        let mut late_link = link("1", "7");
        late_link.timestamp = 9000;
        let early_unlink = unlink("2", "7");

        let resolution = resolve_last_link_action(&[late_link, early_unlink]).unwrap();
        assert_eq!(resolution.action, Some(LinkAction::Unlink));
        assert_eq!(resolution.related_id, None);
    }

    #[test]
    fn test_detailless_link_fails_only_when_it_wins() {
        let bare = ChangeEvent::new("1", 1000, "4", ActionKind::Link);

        let err = resolve_last_link_action(&[bare.clone()]).unwrap_err();
        assert!(matches!(err, Error::MalformedEvent { ref event_id, .. } if event_id == "1"));

        let resolution = resolve_last_link_action(&[bare, unlink("2", "7")]).unwrap();
        assert_eq!(resolution.action, Some(LinkAction::Unlink));
    }

    #[test]
    fn test_detailless_unlink_is_accepted() {
        let bare = ChangeEvent::new("2", 1000, "4", ActionKind::Unlink);
        let resolution = resolve_last_link_action(&[link("1", "7"), bare]).unwrap();
        assert_eq!(resolution.action, Some(LinkAction::Unlink));
    }

    #[test]
    fn test_other_actions_named_like_links_are_ignored() {
        let history = vec![
            link("1", "3"),
            ChangeEvent::new("2", 1000, "link", ActionKind::Other("linked".to_string())),
            ChangeEvent::new("3", 1000, "4", ActionKind::Set),
        ];
        let resolution = resolve_last_link_action(&history).unwrap();
        assert_eq!(resolution.related_id.as_deref(), Some("3"));
        assert_eq!(resolution.action, Some(LinkAction::Link));
    }
}
