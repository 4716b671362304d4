//! CLI-level errors (wraps I/O failures of the script reader)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot open script {path}: {source}")]
    Script { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Script { .. } => crate::exitcode::NOINPUT,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
