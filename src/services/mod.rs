//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between repositories
//! and handlers.

mod car_service;
mod ownership_service;
mod user_service;

pub use car_service::CarService;
pub use ownership_service::OwnershipService;
pub use user_service::{CreateUser, UpdateUser, UserDetail, UserService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub cars: CarService,
    pub users: UserService,
    pub ownership: OwnershipService,
}

impl Services {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipService::new(repos.ownership, repos.cars.clone());
        Self {
            cars: CarService::new(repos.cars),
            users: UserService::new(repos.users, ownership.clone()),
            ownership,
        }
    }
}
