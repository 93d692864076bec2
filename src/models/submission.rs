use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Outcome of an order submission, returned to the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    /// Raw provider response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Raw error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl SubmissionResult {
    /// Provider answered 2xx; success depends on the reported processed count
    pub fn from_provider(count: i64, data: Value) -> Self {
        let success = count > 0;
        let message = if success {
            format!("Order submitted to ZR Express ({} parcel(s) created)", count)
        } else {
            "ZR Express did not create any parcel for this order".to_string()
        };
        Self {
            success,
            message,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            data: None,
            error: Some(err.details()),
        }
    }
}
