// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils clean-ok-message` command.

use crate::Output;
use devutils_app::Result;
use devutils_core::clean_ok_message;
use std::io::BufRead;

/// Reads ok message lines from `input` and prints the cleaned message.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn execute(input: impl BufRead, out: &Output) -> Result<()> {
    let lines = input.lines().collect::<std::io::Result<Vec<String>>>()?;
    let cleaned = clean_ok_message(&lines);
    out.emit(&cleaned, || cleaned.clone())
}
