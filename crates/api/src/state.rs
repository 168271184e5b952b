use std::sync::Arc;

use reelbase_core::metadata::MetadataProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelbase_db::DbPool,
    /// Server configuration. Read by `/health` to report provider setup.
    pub config: Arc<ServerConfig>,
    /// External movie metadata source used to enrich submissions.
    pub provider: Arc<dyn MetadataProvider>,
}
