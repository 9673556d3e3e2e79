//! Root liveness handler.

use axum::Json;

/// Liveness/sanity check.
///
/// `GET /`
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World" }))
}
