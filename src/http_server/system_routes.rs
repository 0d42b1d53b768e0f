//! System HTTP Routes
//!
//! Liveness, version and health endpoints.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::dto::{Health, Version};
use crate::observability::{Event, Logger};

use super::errors::ApiError;

/// Create system routes
pub fn system_routes(logger: Logger) -> Router {
    Router::new()
        .route("/pingpong", get(pingpong_handler))
        .route("/version", get(version_handler))
        .route("/health", get(health_handler))
        .with_state(logger)
}

/// Path segment for the API version, `v1` for every 0.x release
pub fn api_version() -> String {
    match Version::current() {
        Ok(version) if version.major() != "0" => format!("v{}", version.major()),
        _ => "v1".to_string(),
    }
}

/// Route prefix shared by all API endpoints
pub fn api_prefix() -> String {
    format!("/api/{}", api_version())
}

/// Liveness handler
async fn pingpong_handler(State(logger): State<Logger>) -> StatusCode {
    logger.log_event(Event::Pingpong, &[]);
    StatusCode::OK
}

/// Version handler
async fn version_handler(State(logger): State<Logger>) -> Result<Json<Version>, ApiError> {
    logger.log_event(Event::Version, &[]);
    let version = Version::current().map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(version))
}

/// Health check handler
async fn health_handler(State(logger): State<Logger>) -> Json<Health> {
    logger.log_event(Event::Health, &[]);
    Json(Health::ok())
}
