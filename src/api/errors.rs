//! # API Errors
//!
//! Error taxonomy for the HTTP surface and its mapping to status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
///
/// Display strings double as the `error` field of the JSON body, so they
/// are part of the HTTP contract.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a number
    #[error("invalid id")]
    InvalidId(String),

    /// Required body field absent or of the wrong type
    #[error("missing field: {0}")]
    MissingField(String),

    /// Body is not a JSON document
    #[error("invalid body")]
    InvalidBody(String),

    /// No record with the requested id
    #[error("city not found")]
    NotFound,

    /// No route matches the request
    #[error("invalid route")]
    UnknownRoute,

    /// Name already taken by another record
    #[error("city already exists")]
    AlreadyExists(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure other than a uniqueness violation
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnknownRoute => StatusCode::NOT_FOUND,

            // 409 Conflict
            ApiError::AlreadyExists(_) => StatusCode::CONFLICT,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NameExists(name) => ApiError::AlreadyExists(name),
            // Every other engine failure funnels through here; log the
            // detail and report a generic 500 instead of crashing.
            StoreError::Database(e) => {
                let detail = e.to_string();
                Logger::error("store_failure", &[("detail", &detail)]);
                ApiError::Internal(detail)
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingField("name".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::UnknownRoute.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::AlreadyExists("Bratislava".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("disk".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_contract_error_messages() {
        assert_eq!(ApiError::InvalidId("abc".to_string()).to_string(), "invalid id");
        assert_eq!(ApiError::NotFound.to_string(), "city not found");
        assert_eq!(ApiError::UnknownRoute.to_string(), "invalid route");
        assert_eq!(
            ApiError::AlreadyExists("x".to_string()).to_string(),
            "city already exists"
        );
    }

    #[test]
    fn test_conflict_translation_from_store() {
        let err = ApiError::from(StoreError::NameExists("Bratislava".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::NotFound);
        assert_eq!(body.error, "city not found");
        assert_eq!(body.code, 404);
    }
}
