use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ZR Express API error: HTTP {status} - {body}")]
    Provider { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Short machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Network(_) => "network",
            AppError::Io(_) => "io",
            AppError::Json(_) => "json",
            AppError::Provider { .. } => "provider",
            AppError::InvalidResponse(_) => "invalid_response",
            AppError::Config(_) => "config",
            AppError::Server(_) => "server",
        }
    }

    /// Structured description of the error, returned to callers as the raw error object
    pub fn details(&self) -> Value {
        match self {
            AppError::Provider { status, body } => {
                // Keep the provider's JSON error body structured when it is JSON
                let body = serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.clone()));
                json!({
                    "kind": self.kind(),
                    "status": status,
                    "body": body,
                })
            }
            _ => json!({
                "kind": self.kind(),
                "message": self.to_string(),
            }),
        }
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;
