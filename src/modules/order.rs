use serde_json::Value;
use tracing::{error, info};

use crate::error::AppResult;
use crate::models::{OrderSubmission, SubmissionResult};
use crate::proxy::config::ProviderConfig;
use crate::proxy::mappers::{build_request_body, parse_count};
use crate::proxy::upstream::UpstreamClient;

/// Map an order to the provider format and create the parcel
///
/// Never fails: transport errors, provider rejections and unreadable
/// responses all come back as `success = false`. No retry is attempted.
pub async fn submit_order(
    upstream: &UpstreamClient,
    provider: &ProviderConfig,
    order: &OrderSubmission,
) -> SubmissionResult {
    match send_order(upstream, provider, order).await {
        Ok(response) => {
            let count = parse_count(&response);
            let result = SubmissionResult::from_provider(count, response);
            info!(success = result.success, count, "ZR Express submission finished");
            result
        }
        Err(e) => {
            error!("ZR Express submission failed: {}", e);
            SubmissionResult::failure(&e)
        }
    }
}

async fn send_order(
    upstream: &UpstreamClient,
    provider: &ProviderConfig,
    order: &OrderSubmission,
) -> AppResult<Value> {
    let body = build_request_body(order, provider);
    info!("Sending order to {}: {}", upstream.add_colis_url(), body);

    let response = upstream.add_colis(&body).await?;
    info!("ZR Express response: {}", response);

    Ok(response)
}
