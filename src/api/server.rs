//! # HTTP Server
//!
//! Axum-based HTTP server for the city weather API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::store::CityStore;

use super::config::ServerConfig;
use super::errors::ApiError;
use super::routes::{city_routes, AppState};

/// HTTP server for the city weather API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: CityStore) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: CityStore, config: ServerConfig) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with CORS and the unrouted-path fallback
    fn build_router(config: &ServerConfig, store: CityStore) -> Router {
        let state = Arc::new(AppState { store });

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: allow any origin
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // City CRUD under /api
            .nest("/api", city_routes(state))
            // Any other path is a 404 with the contract's body
            .fallback(unknown_route_handler)
            // Apply CORS middleware
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::info("server_started", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn unknown_route_handler() -> ApiError {
    ApiError::UnknownRoute
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_server(dir: &TempDir) -> HttpServer {
        let store = CityStore::new(dir.path().join("weather.db"));
        store.init().unwrap();
        HttpServer::new(store)
    }

    #[test]
    fn test_server_creation() {
        let dir = TempDir::new().unwrap();
        let server = create_test_server(&dir);
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let dir = TempDir::new().unwrap();
        let store = CityStore::new(dir.path().join("weather.db"));
        store.init().unwrap();
        let server = HttpServer::with_config(store, ServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let dir = TempDir::new().unwrap();
        let server = create_test_server(&dir);
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
