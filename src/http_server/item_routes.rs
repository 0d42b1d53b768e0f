//! Item HTTP Routes
//!
//! Maps item endpoints onto [`ItemHandler`] operations.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::dto::{Count, NumericItem, TextItem};
use crate::handler::ItemHandler;
use crate::observability::Event;

use super::errors::ApiError;

/// Item routes with shared handler
pub fn item_routes(handler: Arc<ItemHandler>) -> Router {
    Router::new()
        .route("/number", post(insert_number_handler))
        .route("/text", post(insert_text_handler))
        .route("/delete/:item_id", delete(delete_handler))
        .route("/number/:item_id", get(refer_number_handler))
        .route("/text/:item_id", get(refer_text_handler))
        .route("/count", get(count_handler))
        .with_state(handler)
}

/// Turn an extractor rejection into an `ApiError`, noting it in the log
fn reject(handler: &ItemHandler, rejection: JsonRejection) -> ApiError {
    let err = ApiError::from(rejection);
    let status = err.status_code();
    let reason = err.to_string();
    handler.logger().warn(
        Event::RequestRejected.as_str(),
        &[("reason", reason.as_str()), ("status", status.as_str())],
    );
    err
}

// ==================
// Handlers
// ==================

/// Insert numeric item handler
async fn insert_number_handler(
    State(handler): State<Arc<ItemHandler>>,
    payload: Result<Json<NumericItem>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(item) = payload.map_err(|rejection| reject(&handler, rejection))?;
    handler.insert_number(&item)?;
    Ok(StatusCode::CREATED)
}

/// Insert text item handler
async fn insert_text_handler(
    State(handler): State<Arc<ItemHandler>>,
    payload: Result<Json<TextItem>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(item) = payload.map_err(|rejection| reject(&handler, rejection))?;
    handler.insert_text(&item)?;
    Ok(StatusCode::CREATED)
}

/// Delete item handler
async fn delete_handler(
    State(handler): State<Arc<ItemHandler>>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    handler.delete(&item_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Refer numeric item handler
async fn refer_number_handler(
    State(handler): State<Arc<ItemHandler>>,
    Path(item_id): Path<String>,
) -> Result<Json<NumericItem>, ApiError> {
    Ok(Json(handler.refer_number(&item_id)?))
}

/// Refer text item handler
async fn refer_text_handler(
    State(handler): State<Arc<ItemHandler>>,
    Path(item_id): Path<String>,
) -> Result<Json<TextItem>, ApiError> {
    Ok(Json(handler.refer_text(&item_id)?))
}

/// Count handler
async fn count_handler(State(handler): State<Arc<ItemHandler>>) -> Json<Count> {
    Json(handler.count())
}
