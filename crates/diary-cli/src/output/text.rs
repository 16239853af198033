//! Plain text output formatting for entries.

use diary_core::Entry;

use super::json::entries_json;

/// Print a single entry in human-readable format.
pub fn print_entry(entry: &Entry, quiet: bool) {
    if !quiet {
        println!("Title: {}", entry.title());
        println!("Created: {}", entry.format_date());
        if !entry.tags().is_empty() {
            println!("Tags: {}", entry.tags());
        }
        println!();
    }
    println!("{}", entry.content());
}

/// Print a list of entries as JSON or one summary line each.
pub fn print_entry_list(entries: &[Entry], json: bool, quiet: bool) -> anyhow::Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(&entries_json(entries))?;
        println!("{}", payload);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    for entry in entries {
        println!("{}", summary_line(entry));
    }
    Ok(())
}

fn summary_line(entry: &Entry) -> String {
    if entry.tags().is_empty() {
        format!("{}  {}", entry.format_date(), entry.title())
    } else {
        format!("{}  {}  [{}]", entry.format_date(), entry.title(), entry.tags())
    }
}
