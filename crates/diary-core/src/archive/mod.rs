//! The authenticated journal archive.
//!
//! [`Archive`] owns the current credential and the resident entries, and is
//! the only way to reach either. It has two states:
//!
//! - **logged out**: no session key; entry reads return nothing and writes
//!   return `DiaryError::AuthRequired`
//! - **logged in**: entries are resident as plaintext; every successful
//!   write is persisted before returning
//!
//! Entries are sealed with the session key on their way to the store and
//! opened on the way back. Reads hand out copies; changes go through
//! [`Archive::update_entry`] and [`Archive::delete_entry`].

mod validation;

use std::path::Path;

use chrono::NaiveDate;

use crate::credential::Credential;
use crate::crypto::SessionKey;
use crate::entry::Entry;
use crate::error::{DiaryError, Result};
use crate::storage::{ArchiveStore, FlatFileStore, StoredArchive};

pub use validation::{validate_entry, MAX_TITLE_BYTES};

/// One account's journal, bound to a storage backend.
pub struct Archive<S: ArchiveStore = FlatFileStore> {
    store: S,
    credential: Option<Credential>,
    entries: Vec<Entry>,
}

impl Archive<FlatFileStore> {
    /// Open an archive over the flat files in `dir`, creating the directory
    /// if needed. Nothing is read until [`Archive::login`] or [`Archive::load`].
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_store(FlatFileStore::open(dir)?))
    }
}

impl<S: ArchiveStore> Archive<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            credential: None,
            entries: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_key().is_some()
    }

    /// Username of the logged-in account.
    pub fn current_user(&self) -> Option<&str> {
        self.credential
            .as_ref()
            .filter(|credential| credential.is_authenticated())
            .map(Credential::username)
    }

    /// Create the account and persist it with an empty entry set.
    ///
    /// The archive stays logged out.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::DuplicateAccount` if the store already holds an
    /// account.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if self.store.has_account() {
            return Err(DiaryError::DuplicateAccount);
        }

        let credential = Credential::register(username, password)?;
        self.store.save(&credential, &[])?;
        log::debug!("registered account {}", credential.username());

        self.credential = Some(credential);
        self.entries.clear();
        Ok(())
    }

    /// Load the account, verify the password, and open every entry.
    ///
    /// On any failure the archive is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AccountNotFound` if nothing is registered,
    /// `DiaryError::AuthFailed` for a wrong username or password, or a
    /// storage error if the files cannot be read.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let StoredArchive {
            mut credential,
            mut entries,
        } = self.store.load()?;

        if credential.username() != username || !credential.login(password) {
            log::debug!("login rejected for {}", username);
            return Err(DiaryError::AuthFailed);
        }

        let key = credential.session_key().ok_or(DiaryError::AuthFailed)?;
        for entry in &mut entries {
            entry.decrypt(key);
        }
        log::debug!("logged in as {} with {} entries", username, entries.len());

        self.credential = Some(credential);
        self.entries = entries;
        Ok(())
    }

    /// Seal and persist the resident entries, then end the session.
    ///
    /// The credential and the resident entries are dropped even if the
    /// final save fails; that error is returned. Afterwards [`Archive::save`]
    /// has nothing to write until the next [`Archive::login`] or
    /// [`Archive::load`]. Logging out while logged out does nothing.
    pub fn logout(&mut self) -> Result<()> {
        let Some(credential) = self.credential.take() else {
            self.entries.clear();
            return Ok(());
        };

        let result = match credential.session_key() {
            Some(key) => {
                for entry in &mut self.entries {
                    entry.encrypt(key);
                }
                self.store.save(&credential, &self.entries)
            }
            None => Ok(()),
        };

        if credential.is_authenticated() {
            log::debug!("logged out {}", credential.username());
        }
        self.entries.clear();
        result
    }

    /// Replace the account password and re-seal storage under the new key.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AuthRequired` when logged out, or
    /// `DiaryError::AuthFailed` if `old_password` does not verify.
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<()> {
        self.require_session()?;
        let Some(credential) = self.credential.as_mut() else {
            return Err(DiaryError::AuthRequired);
        };

        let previous = credential.clone();
        if !credential.change_password(old_password, new_password)? {
            return Err(DiaryError::AuthFailed);
        }

        if let Err(err) = self.save() {
            self.credential = Some(previous);
            return Err(err);
        }
        log::debug!("password changed");
        Ok(())
    }

    /// Add a new entry and persist.
    ///
    /// A sealed entry is opened with the session key before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AuthRequired`, `DiaryError::InvalidInput` for an
    /// unstorable title or tags, or `DiaryError::DuplicateTitle`.
    pub fn add_entry(&mut self, mut entry: Entry) -> Result<()> {
        let key = self.require_session()?.clone();
        validate_entry(&entry)?;
        if self.position(entry.title()).is_some() {
            return Err(DiaryError::DuplicateTitle(entry.title().to_string()));
        }

        entry.decrypt(&key);
        self.entries.push(entry);
        if let Err(err) = self.save() {
            self.entries.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Remove the entry titled `title` and persist.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AuthRequired` or `DiaryError::NotFound`.
    pub fn delete_entry(&mut self, title: &str) -> Result<()> {
        self.require_session()?;
        let index = self
            .position(title)
            .ok_or_else(|| DiaryError::NotFound(title.to_string()))?;

        let removed = self.entries.remove(index);
        if let Err(err) = self.save() {
            self.entries.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Replace the entry titled `title` with `entry` and persist.
    ///
    /// The replacement may carry a new title as long as no other entry
    /// already uses it.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AuthRequired`, `DiaryError::NotFound`,
    /// `DiaryError::InvalidInput`, or `DiaryError::DuplicateTitle`.
    pub fn update_entry(&mut self, title: &str, mut entry: Entry) -> Result<()> {
        let key = self.require_session()?.clone();
        let index = self
            .position(title)
            .ok_or_else(|| DiaryError::NotFound(title.to_string()))?;
        validate_entry(&entry)?;
        if entry.title() != title && self.position(entry.title()).is_some() {
            return Err(DiaryError::DuplicateTitle(entry.title().to_string()));
        }

        entry.decrypt(&key);
        let previous = std::mem::replace(&mut self.entries[index], entry);
        if let Err(err) = self.save() {
            self.entries[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    /// A copy of the entry titled `title`, if logged in and present.
    pub fn get_entry(&self, title: &str) -> Option<Entry> {
        if !self.is_authenticated() {
            return None;
        }
        self.position(title).map(|index| self.entries[index].clone())
    }

    /// Copies of all entries in insertion order; empty when logged out.
    pub fn list_entries(&self) -> Vec<Entry> {
        self.select(|_| true)
    }

    /// Entries created on `date` in local time.
    pub fn search_by_date(&self, date: NaiveDate) -> Vec<Entry> {
        self.select(|entry| entry.falls_on(date))
    }

    /// Entries whose title or content contains `keyword` (case-sensitive).
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<Entry> {
        self.select(|entry| entry.matches_keyword(keyword))
    }

    /// Entries whose tag string contains `tag`.
    pub fn search_by_tag(&self, tag: &str) -> Vec<Entry> {
        self.select(|entry| entry.matches_tag(tag))
    }

    /// Persist the credential and a sealed copy of every entry.
    ///
    /// Resident entries are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AuthRequired` if there is no credential to save.
    pub fn save(&self) -> Result<()> {
        let credential = self.credential.as_ref().ok_or(DiaryError::AuthRequired)?;
        match credential.session_key() {
            Some(key) => {
                let sealed: Vec<Entry> = self
                    .entries
                    .iter()
                    .cloned()
                    .map(|mut entry| {
                        entry.encrypt(key);
                        entry
                    })
                    .collect();
                self.store.save(credential, &sealed)
            }
            None => self.store.save(credential, &self.entries),
        }
    }

    /// Replace the in-memory state with what the store holds.
    ///
    /// The loaded credential is logged out and its entries stay sealed
    /// until the next [`Archive::login`].
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AccountNotFound` if nothing is registered.
    pub fn load(&mut self) -> Result<()> {
        let StoredArchive {
            credential,
            entries,
        } = self.store.load()?;
        self.credential = Some(credential);
        self.entries = entries;
        Ok(())
    }

    fn session_key(&self) -> Option<&SessionKey> {
        self.credential.as_ref().and_then(Credential::session_key)
    }

    fn require_session(&self) -> Result<&SessionKey> {
        self.session_key().ok_or(DiaryError::AuthRequired)
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title() == title)
    }

    fn select(&self, predicate: impl Fn(&Entry) -> bool) -> Vec<Entry> {
        if !self.is_authenticated() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }
}
