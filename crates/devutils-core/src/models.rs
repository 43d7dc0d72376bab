// Rust guideline compliant 2026-10-17

//! Core data models for tracker entities and their audit history.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change recorded in an entity's audit history.
///
/// Unknown kinds are preserved as [`ActionKind::Other`] so that a history
/// written by a newer tracker still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    /// The entity was created.
    Create,
    /// One or more properties were set.
    Set,
    /// The entity was attached to another entity.
    Link,
    /// The entity was detached from another entity.
    Unlink,
    /// The entity was retired.
    Retire,
    /// A retired entity was restored.
    Restore,
    /// Any other action name.
    Other(String),
}

impl ActionKind {
    /// Returns the wire name of the action.
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Set => "set",
            ActionKind::Link => "link",
            ActionKind::Unlink => "unlink",
            ActionKind::Retire => "retire",
            ActionKind::Restore => "restore",
            ActionKind::Other(name) => name,
        }
    }
}

impl From<String> for ActionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "create" => ActionKind::Create,
            "set" => ActionKind::Set,
            "link" => ActionKind::Link,
            "unlink" => ActionKind::Unlink,
            "retire" => ActionKind::Retire,
            "restore" => ActionKind::Restore,
            _ => ActionKind::Other(value),
        }
    }
}

impl From<&str> for ActionKind {
    fn from(value: &str) -> Self {
        ActionKind::from(value.to_string())
    }
}

impl From<ActionKind> for String {
    fn from(value: ActionKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The other end of a link or unlink: `(class, node id, property)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDetail {
    /// Class of the related entity (e.g. `issue`).
    pub class: String,
    /// Identifier of the related entity.
    pub node_id: String,
    /// Name of the relation property on the related entity (e.g. `messages`).
    pub property: String,
}

impl LinkDetail {
    /// Creates a new link detail.
    pub fn new(
        class: impl Into<String>,
        node_id: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            node_id: node_id.into(),
            property: property.into(),
        }
    }
}

/// One recorded mutation in an entity's audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Opaque ordering key, increasing within one entity's history.
    pub event_id: String,
    /// Unix timestamp of when the event was recorded.
    pub timestamp: i64,
    /// Identifier of the user who performed the change.
    pub actor_id: String,
    /// What changed.
    pub action: ActionKind,
    /// Related entity, present on link and unlink events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<LinkDetail>,
}

impl ChangeEvent {
    /// Creates an event without a link detail.
    pub fn new(
        event_id: impl Into<String>,
        timestamp: i64,
        actor_id: impl Into<String>,
        action: impl Into<ActionKind>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            actor_id: actor_id.into(),
            action: action.into(),
            detail: None,
        }
    }

    /// Attaches a link detail to the event.
    #[must_use]
    pub fn with_detail(mut self, detail: LinkDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// A line of the on-disk audit log: an event and the entity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Class of the entity (e.g. `msg`, `file`).
    pub class: String,
    /// Identifier of the entity.
    pub node_id: String,
    /// The recorded event.
    #[serde(flatten)]
    pub event: ChangeEvent,
}

impl HistoryRecord {
    /// Validates the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the class, node id or event id is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.class.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "History class cannot be empty".to_string(),
            ));
        }
        if self.node_id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "History node id cannot be empty".to_string(),
            ));
        }
        if self.event.event_id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "History event id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A tracker user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User node identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Assigned role names.
    #[serde(default)]
    pub roles: Vec<String>,
    /// GitHub username, if linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Whether the contributor agreement was signed.
    #[serde(default)]
    pub contrib_form: bool,
}

impl User {
    /// Returns true if the user holds the named role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|assigned| assigned == role)
    }

    /// Validates the user data.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or username is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "User id cannot be empty".to_string(),
            ));
        }
        if self.username.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Username cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A tracker issue, reduced to what the helpers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue node identifier.
    pub id: String,
    /// One-line summary.
    #[serde(default)]
    pub title: String,
    /// Status node identifier.
    pub status: String,
}

impl Issue {
    /// Validates the issue data.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or status is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Issue id cannot be empty".to_string(),
            ));
        }
        if self.status.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(format!(
                "Issue {} has no status",
                self.id
            )));
        }
        Ok(())
    }
}
