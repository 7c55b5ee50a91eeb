//! Liveness probe and the JSON fallback for unknown routes.

use crate::api::common::{ApiError, error_response};
use axum::{
    http::{Method, StatusCode, Uri},
    response::Json,
};
use serde_json::{Value, json};

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running",
    }))
}

/// Fallback for any route that does not exist.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri);
    error_response(StatusCode::NOT_FOUND, "Route not found")
}
