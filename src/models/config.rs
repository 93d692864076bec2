use crate::proxy::{ProviderConfig, ProxyConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
