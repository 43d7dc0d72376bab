// Rust guideline compliant 2026-10-17

//! Shared application services for tracker devutils.
//!
//! This crate provides reusable, non-CLI-specific helpers for tracker
//! directory discovery, attachment status reporting and standardized
//! response envelopes.

pub mod error;
pub mod repo;
pub mod response;
pub mod status;

pub use error::{AppError, ErrorCode, Result};
pub use repo::TrackerContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use status::{attachment_status, AttachmentStatus};
