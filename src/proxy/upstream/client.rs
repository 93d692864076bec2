// Upstream client implementation
// All outbound calls to the ZR Express API go through here

use bytes::Bytes;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::proxy::config::{ProviderConfig, ProxyConfig};
use crate::proxy::credentials::ProviderCredentials;

const ADD_COLIS_METHOD: &str = "add_colis";

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
    headers: header::HeaderMap,
}

impl UpstreamClient {
    pub fn new(provider: &ProviderConfig, proxy: &ProxyConfig) -> AppResult<Self> {
        let http_client = crate::utils::http::create_client(proxy);
        Self::with_client(http_client, &provider.base_url, &provider.credentials())
    }

    pub fn with_client(
        http_client: Client,
        base_url: &str,
        credentials: &ProviderCredentials,
    ) -> AppResult<Self> {
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Self::build_headers(credentials)?,
        })
    }

    /// Build API request address
    fn build_url(base_url: &str, method: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), method)
    }

    pub fn add_colis_url(&self) -> String {
        Self::build_url(&self.base_url, ADD_COLIS_METHOD)
    }

    fn build_headers(credentials: &ProviderCredentials) -> AppResult<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "token",
            header::HeaderValue::from_str(credentials.token())
                .map_err(|e| AppError::Config(format!("Invalid provider token: {}", e)))?,
        );
        headers.insert(
            "key",
            header::HeaderValue::from_str(credentials.key())
                .map_err(|e| AppError::Config(format!("Invalid provider key: {}", e)))?,
        );
        Ok(headers)
    }

    /// Forward a raw body to add_colis and hand back the provider's status and JSON body
    ///
    /// Non-2xx statuses are not errors here, the relay passes them through.
    pub async fn forward_raw(&self, body: Bytes) -> AppResult<(StatusCode, Value)> {
        let response = self
            .http_client
            .post(self.add_colis_url())
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let json = serde_json::from_str::<Value>(&text).map_err(|e| {
            AppError::InvalidResponse(format!("HTTP {} with non-JSON body ({}): {}", status, e, text))
        })?;

        Ok((status, json))
    }

    /// Create parcels; a non-2xx status is an `AppError::Provider`
    pub async fn add_colis(&self, body: &Value) -> AppResult<Value> {
        let response = self
            .http_client
            .post(self.add_colis_url())
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str::<Value>(&text)
            .map_err(|e| AppError::InvalidResponse(format!("{}: {}", e, text)))
    }
}
