//! Storage backend trait definition.
//!
//! The `ArchiveStore` trait is the seam between the archive's session logic
//! and the bytes on disk. The archive decides what is sealed; the store only
//! moves records in and out.

use super::types::StoredArchive;
use crate::credential::Credential;
use crate::entry::Entry;
use crate::error::Result;

/// Persistence interface for one account and its entries.
///
/// Implementations must ensure:
/// - `save` replaces everything previously saved
/// - `save` never writes an entry whose content is plaintext
/// - `load` returns credentials logged out and entries exactly as saved
pub trait ArchiveStore {
    /// Whether an account has been saved.
    fn has_account(&self) -> bool;

    /// Read the saved account and entries.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AccountNotFound` if nothing has been saved,
    /// `DiaryError::StorageUnavailable` if a file cannot be read, or
    /// `DiaryError::CorruptRecord` if a record does not parse.
    fn load(&self) -> Result<StoredArchive>;

    /// Overwrite the saved account and entries.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if any entry is plaintext, or
    /// `DiaryError::StorageUnavailable` if a file cannot be written.
    fn save(&self, credential: &Credential, entries: &[Entry]) -> Result<()>;
}
