// Rust guideline compliant 2026-10-17

//! Cleanup of the "edited ok" status message shown after a form submit.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn counter_property_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s*(?:nosy|message)_count,|,\s*(?:nosy|message)_count( edited)")
            .expect("counter property regex must compile")
    })
}

/// Removes `nosy_count` and `message_count` from an ok message.
///
/// The tracker lists every changed property in the status line, including
/// the two counters it maintains itself. Each line is cleaned, the lines are
/// concatenated as-is and `<br>` is appended.
///
/// # Arguments
///
/// * `lines` - The ok message lines
///
/// # Returns
///
/// The cleaned message as a single HTML fragment.
pub fn clean_ok_message<S: AsRef<str>>(lines: &[S]) -> String {
    let mut cleaned: String = lines
        .iter()
        .map(|line| {
            counter_property_re()
                .replace_all(line.as_ref(), |caps: &Captures<'_>| {
                    caps.get(1).map_or(String::new(), |m| m.as_str().to_string())
                })
                .into_owned()
        })
        .collect();
    cleaned.push_str("<br>");
    cleaned
}
