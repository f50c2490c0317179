use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tecnica_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Outbound HTTP client for Open Graph fetches, bounded by the
    /// configured timeout.
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Build the shared state from a pool and loaded configuration.
    ///
    /// Panics if the HTTP client cannot be constructed, which is the desired
    /// behaviour -- we want misconfiguration to fail fast at startup.
    pub fn new(pool: tecnica_db::DbPool, config: ServerConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.og_fetch_timeout_secs))
            .build()
            .expect("Failed to build outbound HTTP client");

        Self {
            pool,
            config: Arc::new(config),
            http_client,
        }
    }
}
