use std::sync::Arc;
use std::time::Duration;

use canjala_cloud::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: canjala_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded media.
    pub object_store: Arc<dyn ObjectStore>,
    /// Outbound HTTP client used by the image proxy.
    pub http: reqwest::Client,
}

/// Build the outbound HTTP client for image proxy fetches.
pub fn build_http_client(config: &ServerConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.proxy_timeout_secs))
        .user_agent(concat!("canjala-api/", env!("CARGO_PKG_VERSION")))
        .build()
}
