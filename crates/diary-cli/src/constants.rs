//! Constants used throughout the CLI.

/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "DIARY_PASSWORD";

/// Environment variable holding the replacement password for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "DIARY_NEW_PASSWORD";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DIARY_CONFIG";

/// Separator used when joining repeated `--tag` values.
pub const TAG_SEPARATOR: &str = ",";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (account, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong username or password).
    pub const AUTH_FAILED: i32 = 5;
}
