//! # Store Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert rejected by the UNIQUE constraint on `name`
    #[error("city '{0}' already exists")]
    NameExists(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_exists_message() {
        let err = StoreError::NameExists("Bratislava".to_string());
        assert_eq!(err.to_string(), "city 'Bratislava' already exists");
    }
}
