//! Input helpers shared by command handlers.

use std::io::{IsTerminal, Read};

use chrono::NaiveDate;
use dialoguer::Editor;

use crate::errors::CliError;

/// Parse a `--date` argument as a local calendar day.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date \"{}\". Use YYYY-MM-DD.", value)).into()
    })
}

/// Resolve an entry body from the flag, piped stdin, or the editor.
pub fn read_entry_body(no_input: bool, body: Option<String>) -> anyhow::Result<String> {
    if let Some(body) = body {
        return Ok(body);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read entry body from stdin: {}", e))?;
        let body = buffer.trim_end_matches(['\n', '\r']).to_string();
        if body.is_empty() {
            return Err(
                CliError::invalid_input("Entry body is empty. Use --body or pipe text.").into(),
            );
        }
        return Ok(body);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires --body or piped stdin.").into());
    }

    match Editor::new().edit("") {
        Ok(Some(text)) if !text.trim().is_empty() => Ok(text.trim_end().to_string()),
        Ok(_) => Err(CliError::invalid_input("Entry body is empty; nothing saved.").into()),
        Err(e) => Err(anyhow::anyhow!("Failed to open editor: {}", e)),
    }
}
