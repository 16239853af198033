//! Account commands: `register` and `passwd`.

use diary_core::{Archive, ArchiveStore, DiaryError};

use crate::app::{read_new_password, read_password, resolve_config_path, AppContext};
use crate::config::{write_config, DiaryConfig};

pub fn handle_register(ctx: &AppContext) -> anyhow::Result<()> {
    let username = ctx.username()?;
    let dir = ctx.storage_dir()?;
    let mut archive = Archive::open(&dir)?;
    if archive.store().has_account() {
        return Err(DiaryError::DuplicateAccount.into());
    }

    let password = read_password(ctx.cli().no_input, true)?;
    archive.register(&username, &password)?;

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        write_config(&config_path, &DiaryConfig::new(&dir, Some(username.clone())))?;
        log::debug!("wrote default config to {}", config_path.display());
    }

    if !ctx.quiet() {
        println!("Registered {} at {}", username, dir.display());
    }
    Ok(())
}

pub fn handle_passwd(ctx: &AppContext) -> anyhow::Result<()> {
    let (mut archive, old_password) = ctx.login()?;

    let result = read_new_password(ctx.cli().no_input)
        .and_then(|new_password| Ok(archive.change_password(&old_password, &new_password)?));
    let logout = archive.logout();
    result?;
    logout?;

    if !ctx.quiet() {
        println!("Password changed");
    }
    Ok(())
}
