//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::errors::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("cannot attach {child} under {parent}: {source}")]
    Edge {
        parent: f64,
        child: f64,
        #[source]
        source: TreeError,
    },

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Tree(_) | CliError::Edge { .. } => crate::exitcode::DATAERR,
            CliError::Settings(_) => crate::exitcode::CONFIG,
        }
    }
}
