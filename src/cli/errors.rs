//! CLI-specific error types
//!
//! Startup failures are terminal; main prints them and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// I/O failure reading config or binding the server
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Database could not be initialized
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
