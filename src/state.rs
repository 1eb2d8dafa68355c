//! Application state for the Axum web framework.
//!
//! Contains the shared services and pool accessible from all request
//! handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state used with Axum's State extractor.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool (health checks)
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos);
        Self { services, db_pool: pool }
    }
}
