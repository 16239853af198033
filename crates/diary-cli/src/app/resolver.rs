//! Path and account resolution for config and storage.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_storage_dir, read_config, DiaryConfig};
use crate::constants::{CONFIG_ENV, TAG_SEPARATOR};
use crate::errors::CliError;

/// Resolve the config file path, checking DIARY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Read the config file if there is one.
pub fn load_config() -> anyhow::Result<Option<DiaryConfig>> {
    let path = resolve_config_path()?;
    if !path.exists() {
        log::debug!("no config at {}", path.display());
        return Ok(None);
    }
    read_config(&path).map(Some)
}

/// Storage directory from `--dir`/DIARY_DIR, then config, then the XDG default.
pub fn resolve_storage_dir(cli: &Cli, config: Option<&DiaryConfig>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.dir.clone() {
        return Ok(dir);
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.storage.path));
    }
    default_storage_dir()
}

/// Username from `--user`/DIARY_USER, then config.
pub fn resolve_username(cli: &Cli, config: Option<&DiaryConfig>) -> anyhow::Result<String> {
    let username = cli
        .user
        .clone()
        .or_else(|| config.and_then(|config| config.account.username.clone()))
        .filter(|name| !name.trim().is_empty());

    username.ok_or_else(|| {
        let message = "No username given.\nHint: Pass --user NAME or set DIARY_USER.";
        CliError::invalid_input(message).into()
    })
}

/// Error message when a storage directory has no account.
pub fn missing_account_message(dir: &Path) -> String {
    format!("No account found at {}", dir.display())
}

/// Join repeated `--tag` values into the stored tag string.
pub fn tags_from_args(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
