use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: korin_db::DbPool,
    /// Server configuration (accessed by auth and the contact relay).
    pub config: Arc<ServerConfig>,
    /// Shared HTTP client for the contact relay.
    pub http: reqwest::Client,
}
