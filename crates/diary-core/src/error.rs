//! Error types for Diary core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// An entry operation was attempted without an authenticated session
    #[error("Not logged in")]
    AuthRequired,

    /// Username or password did not verify
    #[error("Invalid username or password")]
    AuthFailed,

    /// No account has been registered in the storage directory
    #[error("No account found in storage directory")]
    AccountNotFound,

    /// The storage directory already holds an account
    #[error("An account already exists in this storage directory")]
    DuplicateAccount,

    /// Entry title lookup miss
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Another entry already uses this title
    #[error("Entry already exists: {0}")]
    DuplicateTitle(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A storage file could not be read or written
    #[error("Storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted record could not be parsed
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// Randomness or key material error
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl DiaryError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiaryError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        DiaryError::CorruptRecord(reason.into())
    }
}
