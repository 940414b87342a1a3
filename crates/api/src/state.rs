use std::sync::Arc;

use collections_db::models::creator::Creator;
use collections_db::models::work::Work;

use crate::config::ServerConfig;
use crate::links::Links;
use crate::resolver::{creator_registry, work_registry, RouteRegistry};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: collections_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Route table and summary view maps for building hyperlinks.
    pub links: Arc<Links>,
    /// Resolves work hyperlinks back to records.
    pub works: Arc<RouteRegistry<Work>>,
    /// Resolves creator hyperlinks back to records.
    pub creators: Arc<RouteRegistry<Creator>>,
}

impl AppState {
    pub fn new(pool: collections_db::DbPool, config: ServerConfig) -> Self {
        let links = Links::new(&config.public_base_url);
        Self {
            pool,
            config: Arc::new(config),
            links: Arc::new(links),
            works: Arc::new(work_registry()),
            creators: Arc::new(creator_registry()),
        }
    }
}
