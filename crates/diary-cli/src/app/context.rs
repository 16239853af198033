//! Application context for the Diary CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and runs each
//! command inside a login/logout session.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use zeroize::Zeroizing;

use diary_core::{Archive, ArchiveStore};

use crate::cli::Cli;
use crate::config::DiaryConfig;
use crate::errors::CliError;

use super::password::read_password;
use super::resolver::{load_config, missing_account_message, resolve_storage_dir, resolve_username};

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DiaryConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<Option<&DiaryConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    pub fn storage_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_storage_dir(self.cli, self.config()?)
    }

    pub fn username(&self) -> anyhow::Result<String> {
        resolve_username(self.cli, self.config()?)
    }

    /// Open the archive in the resolved storage directory.
    pub fn open_archive(&self) -> anyhow::Result<Archive> {
        let dir = self.storage_dir()?;
        log::debug!("using storage directory {}", dir.display());
        Ok(Archive::open(&dir)?)
    }

    /// Open the archive and log in with the resolved username and password.
    ///
    /// Returns the password alongside the archive for commands that need
    /// to re-verify it.
    pub fn login(&self) -> anyhow::Result<(Archive, Zeroizing<String>)> {
        let mut archive = self.open_archive()?;
        if !archive.store().has_account() {
            return Err(CliError::not_found(
                missing_account_message(archive.store().dir()),
                "Hint: Run `diary register` first, or pass --dir.",
            )
            .into());
        }

        let username = self.username()?;
        let password = read_password(self.cli.no_input, false)?;
        archive.login(&username, &password)?;
        Ok((archive, password))
    }

    /// Log in, run `f`, and log out again.
    ///
    /// Logout always runs so the entries are sealed back to disk; an error
    /// from `f` takes precedence over one from logout.
    pub fn with_session<T>(
        &self,
        f: impl FnOnce(&mut Archive) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let (mut archive, _password) = self.login()?;
        let result = f(&mut archive);
        let logout = archive.logout();
        let value = result?;
        logout?;
        Ok(value)
    }
}
