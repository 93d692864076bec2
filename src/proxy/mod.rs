// proxy module - ZR Express relay service

pub mod config;
pub mod credentials;
pub mod server;

pub mod handlers; // API endpoint handlers
pub mod mappers; // Provider payload mappers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use config::{ProviderConfig, ProxyConfig};
pub use credentials::ProviderCredentials;
pub use server::{build_router, AppState, AxumServer};
pub use upstream::UpstreamClient;
