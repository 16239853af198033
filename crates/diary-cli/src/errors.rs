//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. Core errors that a user can
//! act on are translated here; everything else falls through to anyhow's
//! generic failure.

use std::fmt;

use diary_core::DiaryError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (account, entry)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong username or password)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Translate a core error the user can act on.
    pub fn from_diary(err: &DiaryError) -> Option<Self> {
        match err {
            DiaryError::NotFound(title) => Some(Self::not_found(
                format!("Entry \"{}\" not found", title),
                "Hint: Run `diary list` to see entry titles.",
            )),
            DiaryError::AccountNotFound => Some(Self::not_found(
                "No account found",
                "Hint: Run `diary register` to create one.",
            )),
            DiaryError::AuthFailed => Some(Self::auth_failed_with_hint(
                "Wrong username or password",
                "Hint: Check --user, or set DIARY_PASSWORD.",
            )),
            DiaryError::DuplicateAccount
            | DiaryError::DuplicateTitle(_)
            | DiaryError::InvalidInput(_) => Some(Self::invalid_input(err.to_string())),
            _ => None,
        }
    }

    /// Find a typed error anywhere in an anyhow chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Option<Self> {
        for cause in err.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return Some(cli_err.clone());
            }
            if let Some(diary_err) = cause.downcast_ref::<DiaryError>() {
                return Self::from_diary(diary_err);
            }
        }
        None
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
