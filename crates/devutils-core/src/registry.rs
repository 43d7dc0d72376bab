// Rust guideline compliant 2026-10-17

//! Extension registry for template utilities and form actions.
//!
//! The host calls [`init`] once at startup. After that the registry is only
//! read.

use crate::action::{Action, RandomIssueAction};
use crate::history::{resolve_last_link_action, LinkResolution};
use crate::roles::{is_coordinator, is_history_ok, is_triager, Request, UserDirectory};
use crate::{cla, message, ChangeEvent, Config, Error, Result, User};
use std::collections::BTreeMap;
use std::fmt;

/// Predicate over a page request.
pub type RequestPredicate = fn(&Request, &dyn UserDirectory, &Config) -> Result<bool>;
/// Predicate over a user id.
pub type UserPredicate = fn(&dyn UserDirectory, &str, &Config) -> Result<bool>;
/// Transformation of an ok message.
pub type MessageCleaner = fn(&[String]) -> String;
/// Resolution of an entity's history.
pub type HistoryResolver = fn(&[ChangeEvent]) -> Result<LinkResolution>;
/// Rendering of a CLA report.
pub type ClaReport = fn(&str, &[User]) -> Result<String>;

/// A template utility, tagged by its calling convention.
#[derive(Clone, Copy)]
pub enum Util {
    /// Takes the current request.
    RequestPredicate(RequestPredicate),
    /// Takes a user id.
    UserPredicate(UserPredicate),
    /// Takes the ok message lines.
    MessageCleaner(MessageCleaner),
    /// Takes an entity history.
    HistoryResolver(HistoryResolver),
    /// Takes a comma-separated name list and the user table.
    ClaReport(ClaReport),
}

impl Util {
    /// Short name of the calling convention.
    pub fn kind(&self) -> &'static str {
        match self {
            Util::RequestPredicate(_) => "request predicate",
            Util::UserPredicate(_) => "user predicate",
            Util::MessageCleaner(_) => "message cleaner",
            Util::HistoryResolver(_) => "history resolver",
            Util::ClaReport(_) => "cla report",
        }
    }
}

impl fmt::Debug for Util {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Util").field(&self.kind()).finish()
    }
}

/// Named utilities and actions.
#[derive(Default)]
pub struct Registry {
    utils: BTreeMap<String, Util>,
    actions: BTreeMap<String, Box<dyn Action>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated by [`init`].
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub fn initialized() -> Result<Self> {
        let mut registry = Self::new();
        init(&mut registry)?;
        Ok(registry)
    }

    /// Registers a utility under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if the name is taken.
    pub fn register_util(&mut self, name: &str, util: Util) -> Result<()> {
        if self.utils.contains_key(name) {
            return Err(Error::DuplicateRegistration(name.to_string()));
        }
        self.utils.insert(name.to_string(), util);
        Ok(())
    }

    /// Registers an action under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if the name is taken.
    pub fn register_action(&mut self, name: &str, action: Box<dyn Action>) -> Result<()> {
        if self.actions.contains_key(name) {
            return Err(Error::DuplicateRegistration(name.to_string()));
        }
        self.actions.insert(name.to_string(), action);
        Ok(())
    }

    /// Looks up a utility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownUtility`] if nothing is registered as `name`.
    pub fn util(&self, name: &str) -> Result<Util> {
        self.utils
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownUtility(name.to_string()))
    }

    /// Looks up an action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownUtility`] if nothing is registered as `name`.
    pub fn action(&self, name: &str) -> Result<&dyn Action> {
        self.actions
            .get(name)
            .map(|action| action.as_ref())
            .ok_or_else(|| Error::UnknownUtility(name.to_string()))
    }

    /// Registered utilities in name order.
    pub fn utils(&self) -> impl Iterator<Item = (&str, Util)> + '_ {
        self.utils.iter().map(|(name, util)| (name.as_str(), *util))
    }

    /// Registered action names in order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.keys().map(String::as_str)
    }
}

/// Registers every utility and action this crate provides.
///
/// # Errors
///
/// Returns an error if any name is already registered.
pub fn init(registry: &mut Registry) -> Result<()> {
    registry.register_util(
        "is_history_ok",
        Util::RequestPredicate(|request, users, config| is_history_ok(request, users, config)),
    )?;
    registry.register_util(
        "is_coordinator",
        Util::RequestPredicate(|request, users, config| is_coordinator(request, users, config)),
    )?;
    registry.register_util(
        "is_triager",
        Util::UserPredicate(|users, user_id, config| is_triager(users, user_id, config)),
    )?;
    registry.register_util(
        "clean_ok_message",
        Util::MessageCleaner(message::clean_ok_message::<String>),
    )?;
    registry.register_util(
        "issueid_and_action_from_class",
        Util::HistoryResolver(resolve_last_link_action),
    )?;
    registry.register_util("clas_as_json", Util::ClaReport(cla::clas_as_json))?;
    registry.register_action("random", Box::new(RandomIssueAction::new()))?;

    tracing::debug!(
        utils = registry.utils.len(),
        actions = registry.actions.len(),
        "registry initialized"
    );
    Ok(())
}
