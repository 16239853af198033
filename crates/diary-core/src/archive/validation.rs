//! Entry field validation.
//!
//! Title and tags each occupy one line of the entry record, so neither may
//! contain a line break or collide with the record sentinel.

use crate::entry::Entry;
use crate::error::{DiaryError, Result};
use crate::storage::RECORD_SENTINEL;

/// Maximum bytes in an entry title.
pub const MAX_TITLE_BYTES: usize = 256;

/// Check that an entry's single-line fields are storable.
pub fn validate_entry(entry: &Entry) -> Result<()> {
    let title = entry.title();
    if title.trim().is_empty() {
        return Err(DiaryError::InvalidInput(
            "Entry title cannot be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_BYTES {
        return Err(DiaryError::InvalidInput(format!(
            "Entry title too long (max {} bytes)",
            MAX_TITLE_BYTES
        )));
    }
    check_line("title", title)?;
    check_line("tags", entry.tags())?;
    Ok(())
}

fn check_line(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(DiaryError::InvalidInput(format!(
            "Entry {} cannot contain line breaks",
            field
        )));
    }
    if value == RECORD_SENTINEL {
        return Err(DiaryError::InvalidInput(format!(
            "Entry {} cannot be {}",
            field, RECORD_SENTINEL
        )));
    }
    Ok(())
}
