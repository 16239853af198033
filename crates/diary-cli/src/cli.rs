use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

/// Diary - a password-protected personal journal kept in plain files
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding user.dat and entries.dat
    #[arg(short, long, global = true, env = "DIARY_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Account username
    #[arg(short, long, global = true, env = "DIARY_USER", value_name = "NAME")]
    pub user: Option<String>,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log storage and session activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title (must be unique)
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Entry body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Add tags to the entry
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Title of the entry to edit
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Give the entry a new title
    #[arg(long, value_name = "TITLE")]
    pub rename: Option<String>,

    /// Replace the entry body
    #[arg(long)]
    pub body: Option<String>,

    /// Replace the entry tags
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Title of the entry to delete
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// Arguments for the `search` command
#[derive(Args)]
#[command(group(
    ArgGroup::new("criterion")
        .required(true)
        .args(["date", "keyword", "tag"])
))]
pub struct SearchArgs {
    /// Entries created on this local date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Entries whose title or body contains this text
    #[arg(long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Entries whose tags contain this text
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the account for a storage directory
    Register,

    /// Add a new entry
    Add(AddArgs),

    /// List entries
    List(ListArgs),

    /// Show a specific entry by title
    Show(ShowArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Search entries by date, keyword, or tag
    Search(SearchArgs),

    /// Change the account password
    Passwd,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
