//! Data types exchanged with storage backends.

use crate::credential::Credential;
use crate::entry::Entry;

/// Everything a store holds for one account.
///
/// Entries are in insertion order and still sealed; the credential is
/// logged out.
#[derive(Debug, Clone)]
pub struct StoredArchive {
    pub credential: Credential,
    pub entries: Vec<Entry>,
}
