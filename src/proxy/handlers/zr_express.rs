// ZR Express relay handler
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bytes::Bytes;
use serde_json::json;
use tracing::{error, info};

use crate::proxy::server::AppState;

/// POST /api/zr-express
///
/// The body is forwarded byte for byte with the account's token/key headers.
/// The provider's status and JSON are relayed as-is; any failure to obtain
/// them becomes a 500 `{error, details}` envelope.
pub async fn handle_forward(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = uuid::Uuid::new_v4();
    info!(
        %request_id,
        "Relaying order to ZR Express: {}",
        String::from_utf8_lossy(&body)
    );

    match state.upstream.forward_raw(body).await {
        Ok((status, payload)) => {
            info!(%request_id, "ZR Express answered {}: {}", status, payload);
            (status, Json(payload)).into_response()
        }
        Err(e) => {
            error!(%request_id, "ZR Express relay failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to forward request to ZR Express",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
