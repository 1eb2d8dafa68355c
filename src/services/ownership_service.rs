//! Association manager for the user/car link.
//!
//! Owns the at-most-one-car-per-user / at-most-one-owner-per-car contract.
//! The duplicate probe runs in the caller's validation pass; under concurrent
//! requests the `UNIQUE (car_id)` constraint on the association table is the
//! arbiter, not any locking here.

use crate::error::AppResult;
use crate::models::CarOwnership;
use crate::repositories::{CarRepository, OwnershipRepository};

#[derive(Clone)]
pub struct OwnershipService {
    ownership: OwnershipRepository,
    cars: CarRepository,
}

impl OwnershipService {
    pub fn new(ownership: OwnershipRepository, cars: CarRepository) -> Self {
        Self { ownership, cars }
    }

    /// Attaches a car to a freshly created user.
    ///
    /// Called only from the user-creation flow, after the duplicate-car check
    /// has passed. A `car_id` that references no existing Car is silently
    /// skipped: the car is optional at creation, a dangling id is not an
    /// error.
    pub async fn attach_on_create(&self, user_id: i32, car_id: i32) -> AppResult<()> {
        if self.cars.find_by_id(car_id).await?.is_none() {
            tracing::debug!(user_id, car_id, "car does not exist, skipping attach");
            return Ok(());
        }
        self.ownership
            .attach(CarOwnership { user_id, car_id })
            .await?;
        Ok(())
    }

    /// Replace semantics for the user's association: every existing row for
    /// the user is removed first, then the new car (if present and existing)
    /// is attached. Never merge.
    pub async fn replace(&self, user_id: i32, car_id: Option<i32>) -> AppResult<()> {
        self.ownership.detach_all(user_id).await?;

        let Some(car_id) = car_id else {
            return Ok(());
        };
        if self.cars.find_by_id(car_id).await?.is_none() {
            tracing::debug!(user_id, car_id, "car does not exist, skipping attach");
            return Ok(());
        }
        self.ownership
            .attach(CarOwnership { user_id, car_id })
            .await?;
        Ok(())
    }

    /// The car's name when `car_id` references an existing Car, otherwise
    /// `None` (serialized as `null` in the decorated user payloads).
    pub async fn car_name_for(&self, car_id: i32) -> AppResult<Option<String>> {
        Ok(self.cars.find_by_id(car_id).await?.map(|car| car.name))
    }

    /// The user's association row, if any.
    pub async fn ownership_for(&self, user_id: i32) -> AppResult<Option<CarOwnership>> {
        self.ownership.find_for_user(user_id).await
    }

    /// Validation-pass probe: is the car already linked to any user?
    pub async fn car_id_taken(&self, car_id: i32) -> AppResult<bool> {
        self.ownership.car_id_taken(car_id).await
    }
}
