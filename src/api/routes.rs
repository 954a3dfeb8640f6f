//! City HTTP Routes
//!
//! The request router / validator: maps method+path+body to store calls
//! and checks input shape before any statement runs. Bodies arrive as
//! untyped JSON and required fields are verified for presence and type
//! explicitly, so a malformed request never reaches storage.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::observability::Logger;
use crate::store::{City, CityListItem, CityStore, Measurements};

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// State shared across handlers
pub struct AppState {
    pub store: CityStore,
}

// ==================
// City Routes
// ==================

/// Create city routes
pub fn city_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cities", get(list_cities_handler))
        .route("/city", post(create_city_handler))
        .route("/city/:id", get(get_city_handler))
        .route("/city/:id", put(update_city_handler))
        .route("/city/:id", delete(delete_city_handler))
        .with_state(state)
}

// ==================
// Validation Helpers
// ==================

/// Parse a path identifier; anything non-numeric is a 400
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Unwrap the body extractor; a non-JSON body is a 400
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::InvalidBody(rejection.to_string())),
    }
}

fn require_str<'a>(body: &'a Value, field: &str) -> ApiResult<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::MissingField(field.to_string()))
}

fn require_f64(body: &Value, field: &str) -> ApiResult<f64> {
    body.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::MissingField(field.to_string()))
}

/// The three measurement fields, required together
fn require_measurements(body: &Value) -> ApiResult<Measurements> {
    Ok(Measurements {
        wind_speed: require_f64(body, "wind_speed")?,
        precipitation_mm: require_f64(body, "precipitation_mm")?,
        temperature: require_f64(body, "temperature")?,
    })
}

// ==================
// Handlers
// ==================

/// List all cities (id and name)
async fn list_cities_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CityListItem>>> {
    Ok(Json(state.store.list()?))
}

/// Get the full record for one city
async fn get_city_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<City>> {
    let id = parse_id(&id)?;
    let city = state.store.get(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(city))
}

/// Create a city with its initial measurements
async fn create_city_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let body = parse_body(body)?;
    let name = require_str(&body, "name")?;
    let measurements = require_measurements(&body)?;

    let id = state.store.insert(name, &measurements)?;
    Logger::info("city_created", &[("id", &id.to_string()), ("name", name)]);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("city added")),
    ))
}

/// Replace the three measurement fields of one city
async fn update_city_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let body = parse_body(body)?;
    let measurements = require_measurements(&body)?;

    let updated = state.store.update(id, &measurements)?;
    if updated == 0 {
        return Err(ApiError::NotFound);
    }
    Logger::info("city_updated", &[("id", &id.to_string())]);
    Ok(Json(MessageResponse::new("city updated")))
}

/// Delete one city
async fn delete_city_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    let deleted = state.store.delete(id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    Logger::info("city_deleted", &[("id", &id.to_string())]);
    Ok(Json(MessageResponse::new("city deleted")))
}
