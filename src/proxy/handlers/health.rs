// Health handler
use axum::response::Json;
use serde_json::{json, Value};

/// GET /health - liveness only, the provider is never contacted
pub async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "ZR Express proxy is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
