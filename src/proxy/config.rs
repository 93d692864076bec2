use serde::{Deserialize, Serialize};

use super::credentials::ProviderCredentials;

/// Relay server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Whether LAN access is allowed
    /// - false: local access only 127.0.0.1 (default)
    /// - true: listen on 0.0.0.0
    #[serde(default)]
    pub allow_lan_access: bool,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Outbound request timeout (seconds), none by default
    #[serde(default)]
    pub request_timeout: Option<u64>,

    /// Upstream proxy configuration
    #[serde(default)]
    pub upstream_proxy: UpstreamProxyConfig,
}

/// Upstream proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamProxyConfig {
    /// Enabled
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: default_port(),
            request_timeout: None,
            upstream_proxy: UpstreamProxyConfig::default(),
        }
    }
}

fn default_port() -> u16 {
    3001
}

impl ProxyConfig {
    /// Get the actual listening address
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://procolis.com/api_v1";
pub const DEFAULT_SOURCE: &str = "reseller-store";

/// ZR Express account configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub key: String,

    /// Provenance tag sent as `Source` on every parcel
    #[serde(default = "default_source")]
    pub source: String,

    /// Mark created parcels as confirmed (`Confrimee = "1"`)
    #[serde(default)]
    pub confirm_orders: bool,

    /// Also send token/key as body fields on mapped submissions
    #[serde(default)]
    pub credentials_in_body: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            key: String::new(),
            source: default_source(),
            confirm_orders: false,
            credentials_in_body: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl ProviderConfig {
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::new(self.token.clone(), self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let proxy: ProxyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(proxy.port, 3001);
        assert!(proxy.request_timeout.is_none());
        assert_eq!(proxy.get_bind_address(), "127.0.0.1");

        let provider: ProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.source, DEFAULT_SOURCE);
        assert!(!provider.credentials_in_body);
    }

    #[test]
    fn test_lan_bind_address() {
        let proxy = ProxyConfig {
            allow_lan_access: true,
            ..ProxyConfig::default()
        };
        assert_eq!(proxy.get_bind_address(), "0.0.0.0");
    }
}
