//! JSON output formatting for entries.

use diary_core::Entry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "title": entry.title(),
        "created_at": entry.timestamp(),
        "date": entry.format_date(),
        "tags": entry.tags(),
        "content": entry.content(),
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}
