//! Health check handlers

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe
///
/// No external dependencies to verify; the service is ready once it is
/// serving.
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
