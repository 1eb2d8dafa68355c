//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod car_repo;
mod ownership_repo;
mod user_repo;

pub use car_repo::CarRepository;
pub use ownership_repo::OwnershipRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub cars: CarRepository,
    pub users: UserRepository,
    pub ownership: OwnershipRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            ownership: OwnershipRepository::new(pool),
        }
    }
}
