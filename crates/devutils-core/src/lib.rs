// Rust guideline compliant 2026-10-17

//! Tracker Devutils Core Library
//!
//! This crate provides the helpers an issue tracker's templates and forms call into:
//! - Data models (ChangeEvent, ActionKind, LinkDetail, User, Issue)
//! - History scanning for the last link/unlink transition of an entity
//! - Role predicates, ok-message cleanup and CLA lookups
//! - The random open issue action and the extension registry
//! - JSONL storage, configuration and error types

pub mod action;
pub mod cla;
pub mod config;
pub mod error;
pub mod history;
pub mod message;
pub mod models;
pub mod registry;
pub mod roles;
pub mod storage;

pub use action::{Action, ActionContext, IssueIndex, RandomIssueAction, Redirect};
pub use cla::{cla_statuses, clas_as_json, ClaStatuses};
pub use config::Config;
pub use error::{Error, Result};
pub use history::{
    resolve_for, resolve_last_link_action, HistoryProvider, LinkAction, LinkResolution,
};
pub use message::clean_ok_message;
pub use models::{ActionKind, ChangeEvent, HistoryRecord, Issue, LinkDetail, User};
pub use registry::{init, Registry, Util};
pub use roles::{is_coordinator, is_history_ok, is_triager, Request, UserDirectory};
pub use storage::{JsonlFile, Record, TrackerDb};
