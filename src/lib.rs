//! cityweather - a minimal HTTP service for city weather records
//!
//! One flat table of cities, five CRUD endpoints, one SQLite statement
//! per request.

pub mod api;
pub mod cli;
pub mod observability;
pub mod store;
