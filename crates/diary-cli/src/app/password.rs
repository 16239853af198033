//! Password input from the environment or a hidden prompt.

use std::io::IsTerminal;

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::constants::{NEW_PASSWORD_ENV, PASSWORD_ENV};
use crate::errors::CliError;

/// Password for the current account.
///
/// With `confirm`, an interactive prompt asks twice; used when the password
/// is being set rather than checked.
pub fn read_password(no_input: bool, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    read_secret(PASSWORD_ENV, "Password", no_input, confirm)
}

/// Replacement password for `passwd`.
pub fn read_new_password(no_input: bool) -> anyhow::Result<Zeroizing<String>> {
    read_secret(NEW_PASSWORD_ENV, "New password", no_input, true)
}

fn read_secret(
    var: &str,
    prompt: &str,
    no_input: bool,
    confirm: bool,
) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var(var) {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }

    let interactive = std::io::stdin().is_terminal() && !no_input;
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            var
        ))
        .into());
    }

    let mut input = Password::new().with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }
    input
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
