//! Association-table repository for the `users_cars` join rows.
//!
//! All attach/detach operations go through this repository; nothing else in
//! the crate touches the association table directly. The unique constraint on
//! `car_id` is the single source of truth for the one-owner-per-car
//! invariant, so no application-level locking happens here.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::CarOwnership;

#[derive(Clone)]
pub struct OwnershipRepository {
    pool: AsyncDbPool,
}

impl OwnershipRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts one association row. A concurrent attach of the same car loses
    /// against the unique constraint and surfaces as a `Duplicate` error.
    pub async fn attach(&self, ownership: CarOwnership) -> Result<CarOwnership, AppError> {
        use crate::schema::users_cars::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users_cars)
            .values(&ownership)
            .returning(CarOwnership::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Removes every association row for the user (detach-all semantics).
    pub async fn detach_all(&self, owner_id: i32) -> Result<usize, AppError> {
        use crate::schema::users_cars::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(users_cars.filter(user_id.eq(owner_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// The user's association row, if one exists.
    pub async fn find_for_user(&self, owner_id: i32) -> Result<Option<CarOwnership>, AppError> {
        use crate::schema::users_cars::dsl::*;
        let mut conn = self.pool.get().await?;

        users_cars
            .filter(user_id.eq(owner_id))
            .select(CarOwnership::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Duplicate probe: is this car already linked to any user?
    pub async fn car_id_taken(&self, car: i32) -> Result<bool, AppError> {
        use crate::schema::users_cars::dsl::*;
        let mut conn = self.pool.get().await?;

        let count: i64 = users_cars
            .filter(car_id.eq(car))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)?;
        Ok(count > 0)
    }
}
