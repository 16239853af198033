//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path and username resolution from flags, env, and config
//! - Password input from env or prompt
//! - The per-command session wrapper

mod context;
mod password;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use password::{read_new_password, read_password};
pub use resolver::{resolve_config_path, tags_from_args};
