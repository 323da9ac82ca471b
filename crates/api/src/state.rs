use std::sync::Arc;

use shelfwise_engine::{BadgeEngine, LendingService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and both services hold a reference-counted pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shelfwise_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Lending request lifecycle.
    pub lending: LendingService,
    /// Badge qualification and reading statistics.
    pub badges: BadgeEngine,
}

impl AppState {
    /// Wire both services to `pool`.
    pub fn new(pool: shelfwise_db::DbPool, config: ServerConfig) -> Self {
        Self {
            lending: LendingService::new(pool.clone()),
            badges: BadgeEngine::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
