//! # Diary Core
//!
//! Core library for Diary - a single-user, password-protected journal kept
//! in two flat files.
//!
//! This crate provides the account model, entry records, the content cipher,
//! and the archive that ties them to storage, independent of the CLI.
//!
//! ## Architecture
//!
//! - **archive**: Session state and entry operations
//! - **credential**: Account registration, login, and password changes
//! - **entry**: Journal records and their line-oriented serialization
//! - **crypto**: Digest, key derivation, and the content cipher
//! - **storage**: Storage trait and the flat-file backend
//!
//! ## Security
//!
//! Entry content is obfuscated with a repeating-key XOR cipher.
//! That keeps the journal unreadable at a glance, not safe from an attacker
//! with the files. See [`crypto`] for details.

pub mod archive;
pub mod credential;
pub mod crypto;
pub mod entry;
pub mod error;
pub mod storage;

pub use archive::Archive;
pub use credential::Credential;
pub use entry::Entry;
pub use error::{DiaryError, Result};
pub use storage::{ArchiveStore, FlatFileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
