//! Output formatting helpers for the CLI.
//!
//! Entries print either as JSON for scripting or as plain text.

mod json;
mod text;

// Re-export public API
pub use json::{entries_json, entry_json};
pub use text::{print_entry, print_entry_list};
