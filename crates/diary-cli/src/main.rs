//! Diary CLI - a password-protected personal journal kept in plain files
//!
//! This is the command-line interface for Diary. Every command opens the
//! storage directory, logs in, does its work, and logs out again.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{account, entries, misc};
use crate::constants::exit_codes;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_err) = CliError::from_anyhow(&e) {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_codes::FAILURE);
    }
}

/// `--verbose` forces debug output; otherwise RUST_LOG applies, defaulting
/// to warnings only.
fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Register => account::handle_register(ctx),
        Commands::Add(args) => entries::handle_add(ctx, args),
        Commands::List(args) => entries::handle_list(ctx, args),
        Commands::Show(args) => entries::handle_show(ctx, args),
        Commands::Edit(args) => entries::handle_edit(ctx, args),
        Commands::Delete(args) => entries::handle_delete(ctx, args),
        Commands::Search(args) => entries::handle_search(ctx, args),
        Commands::Passwd => account::handle_passwd(ctx),
        Commands::Completions(args) => misc::handle_completions(args),
    }
}
