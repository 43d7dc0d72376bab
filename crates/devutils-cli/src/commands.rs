// Rust guideline compliant 2026-10-17

//! Command implementations for the devutils CLI.

pub mod cla;
pub mod history;
pub mod init;
pub mod link_status;
pub mod message;
pub mod random;
pub mod roles;
pub mod utils;
