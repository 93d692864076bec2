use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::AppConfig;

const DATA_DIR: &str = ".zr_express_proxy";
const CONFIG_FILE: &str = "config.json";

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "ZR_PROXY_CONFIG";

/// Get data directory path
pub fn get_data_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Failed to get user home directory")?;
    let data_dir = home.join(DATA_DIR);

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;
    }

    Ok(data_dir)
}

fn config_path() -> AppResult<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let data_dir = get_data_dir().map_err(AppError::Config)?;
    Ok(data_dir.join(CONFIG_FILE))
}

/// Load application config: file (if any), then environment overrides
pub fn load_app_config() -> AppResult<AppConfig> {
    let path = config_path()?;
    let mut config = load_config_file(&path)?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    validate_config(&config)?;

    tracing::info!(
        "Configuration loaded from {:?} (provider: {}, source: {})",
        path,
        config.provider.base_url,
        config.provider.source
    );
    if !config.provider.credentials().is_complete() {
        tracing::warn!("ZR Express token/key are not configured, the provider will reject orders");
    }

    Ok(config)
}

/// Missing file means defaults; an unreadable or invalid file is an error
pub fn load_config_file(path: &Path) -> AppResult<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
}

/// Apply `ZR_EXPRESS_*` / `ZR_PROXY_*` overrides using the given variable lookup
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let provider = &mut config.provider;
    if let Some(v) = lookup("ZR_EXPRESS_BASE_URL") {
        provider.base_url = v;
    }
    if let Some(v) = lookup("ZR_EXPRESS_TOKEN") {
        provider.token = v;
    }
    if let Some(v) = lookup("ZR_EXPRESS_KEY") {
        provider.key = v;
    }
    if let Some(v) = lookup("ZR_EXPRESS_SOURCE") {
        provider.source = v;
    }

    let proxy = &mut config.proxy;
    if let Some(v) = lookup("ZR_PROXY_PORT") {
        match v.parse::<u16>() {
            Ok(port) => proxy.port = port,
            Err(_) => tracing::warn!("Ignoring invalid ZR_PROXY_PORT value: {}", v),
        }
    }
    if let Some(v) = lookup("ZR_PROXY_ALLOW_LAN") {
        proxy.allow_lan_access = matches!(v.as_str(), "1" | "true" | "yes");
    }
}

pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    let url = url::Url::parse(&config.provider.base_url).map_err(|e| {
        AppError::Config(format!("Invalid provider base_url {}: {}", config.provider.base_url, e))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::Config(format!(
            "Unsupported provider URL scheme: {}",
            url.scheme()
        )));
    }
    Ok(())
}
