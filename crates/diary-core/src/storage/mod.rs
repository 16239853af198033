//! Storage abstraction for Diary.
//!
//! This module defines the `ArchiveStore` trait and the flat-file backend
//! that persists one account and its entries.
//!
//! ## Security
//!
//! Stores never see plaintext content: the archive seals every entry with
//! the session key before handing it over, and backends reject anything
//! that is not sealed.

pub mod flat_file;
pub mod traits;
pub mod types;

// Re-export public types
pub use flat_file::{FlatFileStore, ENTRIES_FILE, RECORD_SENTINEL, USER_FILE};
pub use traits::ArchiveStore;
pub use types::StoredArchive;
