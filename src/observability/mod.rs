//! # Observability
//!
//! Structured logging for server lifecycle and store events.

mod logger;

pub use logger::{Logger, Severity};
