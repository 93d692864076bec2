// Mapped order submission handler
use axum::{extract::State, response::Json};
use bytes::Bytes;
use serde_json::Value;

use crate::models::{OrderSubmission, SubmissionResult};
use crate::modules::order::submit_order;
use crate::proxy::server::AppState;

/// POST /api/orders
///
/// Runs the field mapping server-side so provider credentials stay on the
/// relay. Any body is accepted: unparseable input maps to the default order.
pub async fn handle_submit(State(state): State<AppState>, body: Bytes) -> Json<SubmissionResult> {
    tracing::info!("Received order submission: {}", String::from_utf8_lossy(&body));

    let value = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    let order = OrderSubmission::from_value(value);

    Json(submit_order(&state.upstream, &state.provider, &order).await)
}
