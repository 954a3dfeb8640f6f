//! CLI module for cityweather
//!
//! Provides command-line interface for:
//! - init: create the database file and table
//! - serve: boot the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliResult};
