//! CLI error types and exit codes

use thiserror::Error;
use usersync_cognito::ConfigError;
use usersync_core::SyncError;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: The remote store could not be brought in line, or an I/O failure
/// - 2: Caller misuse (bad arguments, bad request, bad configuration)
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid request: {0}")]
    Sync(#[from] SyncError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid request file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User not synchronized: {0}")]
    NotSynchronized(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotSynchronized(_) | CliError::Io(_) => 1,
            CliError::Config(_)
            | CliError::Sync(_)
            | CliError::Validation(_)
            | CliError::Json(_) => 2,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {self}");
        } else {
            eprintln!("Error: {self}");
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {suggestion}");
            } else {
                eprintln!("\nSuggestion: {suggestion}");
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => {
                Some("Set COGNITO_USER_POOL_ID and COGNITO_CLIENT_ID, then run 'usersync check-config'.")
            }
            CliError::Sync(SyncError::UnsupportedAction { .. }) => {
                Some("Use --action update or --action delete.")
            }
            _ => None,
        }
    }
}
