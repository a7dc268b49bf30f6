//! Command error handling
//!
//! This module provides unified error handling for the CLI,
//! mapping internal errors to process exit codes.

use indexmass_shared::EngineError;
use thiserror::Error;

/// Exit code for bad arguments or invalid input (EX_USAGE)
pub const EXIT_USAGE: i32 = 64;

/// Exit code for unreadable data (EX_DATAERR)
pub const EXIT_DATA: i32 = 65;

/// Exit code for internal failures (EX_SOFTWARE)
pub const EXIT_SOFTWARE: i32 = 70;

/// Exit code for file system failures (EX_IOERR)
pub const EXIT_IO: i32 = 74;

/// Exit code for configuration problems (EX_CONFIG)
pub const EXIT_CONFIG: i32 = 78;

/// CLI error type that can be converted to an exit code
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Input(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Preference file is not valid TOML: {0}")]
    PreferencesRead(#[from] toml::de::Error),

    #[error("Failed to encode preferences: {0}")]
    PreferencesWrite(#[from] toml::ser::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => EXIT_USAGE,
            CliError::PreferencesRead(_) => EXIT_DATA,
            CliError::Config(_) => EXIT_CONFIG,
            CliError::Io(_) => EXIT_IO,
            CliError::PreferencesWrite(_) | CliError::Json(_) => EXIT_SOFTWARE,
        }
    }
}

/// Result type alias for command handlers
pub type CliResult<T> = Result<T, CliError>;
