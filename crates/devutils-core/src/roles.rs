// Rust guideline compliant 2026-10-17

//! Role-based predicates used by the tracker templates.

use crate::{Config, Error, Result, User};

/// Class name of user entities.
pub const USER_CLASS: &str = "user";

/// The page request a predicate is evaluated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Id of the logged-in user.
    pub user_id: String,
    /// Class of the entity being viewed.
    pub class_name: String,
    /// Id of the entity being viewed, if any.
    pub node_id: Option<String>,
}

impl Request {
    /// Creates a request for `class_name`/`node_id` made by `user_id`.
    pub fn new(
        user_id: impl Into<String>,
        class_name: impl Into<String>,
        node_id: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            class_name: class_name.into(),
            node_id,
        }
    }
}

/// Lookup of users by id.
pub trait UserDirectory {
    /// Returns the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no such user exists.
    fn user(&self, user_id: &str) -> Result<User>;
}

impl UserDirectory for [User] {
    fn user(&self, user_id: &str) -> Result<User> {
        self.iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("user{}", user_id)))
    }
}

impl UserDirectory for Vec<User> {
    fn user(&self, user_id: &str) -> Result<User> {
        self.as_slice().user(user_id)
    }
}

/// Returns true if the requester may view the entity's history.
///
/// A user's history is visible only to that user and to coordinators. The
/// history of every other class is visible to everyone.
///
/// # Errors
///
/// Returns an error if the requesting user cannot be looked up.
pub fn is_history_ok<D>(request: &Request, users: &D, config: &Config) -> Result<bool>
where
    D: UserDirectory + ?Sized,
{
    if request.class_name != USER_CLASS {
        return Ok(true);
    }
    if request.node_id.as_deref() == Some(request.user_id.as_str()) {
        return Ok(true);
    }
    is_coordinator(request, users, config)
}

/// Returns true if the requesting user has the coordinator role.
///
/// # Errors
///
/// Returns an error if the requesting user cannot be looked up.
pub fn is_coordinator<D>(request: &Request, users: &D, config: &Config) -> Result<bool>
where
    D: UserDirectory + ?Sized,
{
    let user = users.user(&request.user_id)?;
    Ok(user.has_role(&config.coordinator_role))
}

/// Returns true if the given user has the triager role.
///
/// # Errors
///
/// Returns an error if the user cannot be looked up.
pub fn is_triager<D>(users: &D, user_id: &str, config: &Config) -> Result<bool>
where
    D: UserDirectory + ?Sized,
{
    let user = users.user(user_id)?;
    Ok(user.has_role(&config.triager_role))
}
