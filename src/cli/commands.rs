//! CLI command implementations
//!
//! Boot sequence: load configuration, create the table idempotently,
//! then (for `serve`) hand the store to the HTTP server.

use std::fs;
use std::path::Path;

use crate::api::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::store::CityStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to a command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

/// Create the database file and the cities table
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = CityStore::new(&config.db_path);
    store.init()?;
    Logger::info("store_initialized", &[("db_path", &config.db_path)]);
    Ok(())
}

/// Boot the store and serve HTTP until shutdown
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = CityStore::new(&config.db_path);
    store.init()?;

    let server = HttpServer::with_config(store, config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cityweather.json");
        fs::write(&path, r#"{"port": 4000, "host": "127.0.0.1"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_load_config_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cityweather.json");
        fs::write(&path, "not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_init_creates_database() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("weather.db");
        let config_path = dir.path().join("cityweather.json");
        fs::write(
            &config_path,
            format!(r#"{{"db_path": "{}"}}"#, db_path.display()),
        )
        .unwrap();

        init(&config_path).unwrap();
        assert!(db_path.exists());
    }
}
