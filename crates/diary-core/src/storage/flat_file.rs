//! Flat-file storage backend.
//!
//! One directory holds two text files:
//!
//! - `user.dat`: username, password digest, and hex salt on three lines
//! - `entries.dat`: the entry count on the first line, then each entry's
//!   serialization followed by a line holding exactly [`RECORD_SENTINEL`]
//!
//! Every save rewrites both files in place. There is no temp-file rename and
//! no checksum, so a crash during a write can leave `entries.dat` truncated.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::ArchiveStore;
use super::types::StoredArchive;
use crate::credential::Credential;
use crate::entry::Entry;
use crate::error::{DiaryError, Result};

/// File holding the account record.
pub const USER_FILE: &str = "user.dat";

/// File holding the entry records.
pub const ENTRIES_FILE: &str = "entries.dat";

/// Line terminating each entry record in [`ENTRIES_FILE`].
pub const RECORD_SENTINEL: &str = "---END_ENTRY---";

/// Storage backend writing `user.dat` and `entries.dat` into one directory.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    dir: PathBuf,
}

impl FlatFileStore {
    /// Use `dir` for storage, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::StorageUnavailable` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| DiaryError::storage(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    pub fn entries_path(&self) -> PathBuf {
        self.dir.join(ENTRIES_FILE)
    }

    fn read_entries(&self) -> Result<Vec<Entry>> {
        let path = self.entries_path();
        match fs::read_to_string(&path) {
            Ok(contents) => parse_entries(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} missing, starting with no entries", path.display());
                Ok(Vec::new())
            }
            Err(err) => Err(DiaryError::storage(path, err)),
        }
    }
}

impl ArchiveStore for FlatFileStore {
    fn has_account(&self) -> bool {
        self.user_path().exists()
    }

    fn load(&self) -> Result<StoredArchive> {
        let user_path = self.user_path();
        let user_record = match fs::read_to_string(&user_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DiaryError::AccountNotFound)
            }
            Err(err) => return Err(DiaryError::storage(user_path, err)),
        };

        let credential = Credential::deserialize(&user_record)?;
        let entries = self.read_entries()?;
        log::debug!(
            "loaded account with {} entries from {}",
            entries.len(),
            self.dir.display()
        );

        Ok(StoredArchive {
            credential,
            entries,
        })
    }

    fn save(&self, credential: &Credential, entries: &[Entry]) -> Result<()> {
        if let Some(entry) = entries.iter().find(|entry| !entry.is_encrypted()) {
            return Err(DiaryError::InvalidInput(format!(
                "Refusing to write plaintext entry \"{}\"",
                entry.title()
            )));
        }

        let user_path = self.user_path();
        fs::write(&user_path, credential.serialize())
            .map_err(|e| DiaryError::storage(user_path, e))?;

        let entries_path = self.entries_path();
        fs::write(&entries_path, format_entries(entries))
            .map_err(|e| DiaryError::storage(entries_path, e))?;

        log::debug!(
            "saved account with {} entries to {}",
            entries.len(),
            self.dir.display()
        );
        Ok(())
    }
}

fn format_entries(entries: &[Entry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entries.len());
    for entry in entries {
        let _ = writeln!(out, "{}", entry.serialize());
        let _ = writeln!(out, "{}", RECORD_SENTINEL);
    }
    out
}

fn parse_entries(contents: &str) -> Result<Vec<Entry>> {
    let mut lines = contents.lines();
    let count_line = match lines.next() {
        Some(line) => line.trim(),
        None => return Ok(Vec::new()),
    };
    let count: usize = count_line.parse().map_err(|_| {
        DiaryError::corrupt(format!("entries file has count line {:?}", count_line))
    })?;

    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let mut record: Vec<&str> = Vec::new();
        loop {
            match lines.next() {
                Some(line) if line == RECORD_SENTINEL => break,
                Some(line) => record.push(line),
                None => {
                    return Err(DiaryError::corrupt(format!(
                        "entries file ends inside record {} of {}",
                        index + 1,
                        count
                    )))
                }
            }
        }
        entries.push(Entry::deserialize(&record.join("\n"))?);
    }

    if lines.any(|line| !line.trim().is_empty()) {
        log::warn!("ignoring data after the last of {} entry records", count);
    }

    Ok(entries)
}
