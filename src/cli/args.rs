//! CLI argument definitions using clap
//!
//! Commands:
//! - cityweather init --config <path>
//! - cityweather serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cityweather - A minimal HTTP service for city weather records
#[derive(Parser, Debug)]
#[command(name = "cityweather")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and cities table
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./cityweather.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./cityweather.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
