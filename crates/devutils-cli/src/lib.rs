// Rust guideline compliant 2026-10-17

//! Tracker devutils CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use logging::{init_tracing, parse_log_level};
pub use output::Output;
