//! # HTTP API
//!
//! The request router / validator for the city weather service.
//!
//! # Endpoints
//!
//! - `GET /api/cities` - list all cities (id and name)
//! - `GET /api/city/{id}` - full record for one city
//! - `POST /api/city` - create a city
//! - `PUT /api/city/{id}` - replace a city's measurements
//! - `DELETE /api/city/{id}` - delete a city

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
