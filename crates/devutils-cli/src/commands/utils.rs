// Rust guideline compliant 2026-10-17

//! Implementation of the `devutils utils` command.

use crate::Output;
use devutils_app::Result;
use devutils_core::Registry;
use tabled::{builder::Builder, settings::Style};

/// Lists the registered template utilities and actions.
///
/// # Errors
///
/// Returns an error if the registry cannot be initialized.
pub fn execute(out: &Output) -> Result<()> {
    let registry = Registry::initialized()?;

    let utils: Vec<serde_json::Value> = registry
        .utils()
        .map(|(name, util)| serde_json::json!({ "name": name, "kind": util.kind() }))
        .collect();
    let actions: Vec<&str> = registry.action_names().collect();

    out.emit(
        &serde_json::json!({ "utils": utils, "actions": actions }),
        || {
            let mut builder = Builder::default();
            builder.push_record(vec!["Name", "Kind"]);
            for (name, util) in registry.utils() {
                builder.push_record(vec![name, util.kind()]);
            }
            for name in registry.action_names() {
                builder.push_record(vec![name, "action"]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            table.to_string()
        },
    )
}
