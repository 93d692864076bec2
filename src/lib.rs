pub mod error;
pub mod models;
pub mod modules;
pub mod proxy;
mod utils;

use modules::logger;
use tracing::{error, info};

use crate::error::AppResult;
use crate::proxy::{AppState, AxumServer, UpstreamClient};

/// Process entry: logger, configuration, relay server, Ctrl-C shutdown
pub async fn run() -> AppResult<()> {
    logger::init_logger();

    let config = modules::config::load_app_config().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let upstream = UpstreamClient::new(&config.provider, &config.proxy)?;
    let state = AppState::new(config.provider.clone(), upstream);

    let (server, handle) =
        AxumServer::start(config.proxy.get_bind_address(), config.proxy.port, state).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");

    server.stop();
    if let Err(e) = handle.await {
        error!("Server task ended abnormally: {}", e);
    }

    Ok(())
}
