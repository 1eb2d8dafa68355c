//! Car repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Car, NewCar};

/// Car repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct CarRepository {
    pool: AsyncDbPool,
}

impl CarRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new car, returning it with the generated id and timestamps.
    pub async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(cars)
            .values(&new_car)
            .returning(Car::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a car by id, `None` if absent.
    pub async fn find_by_id(&self, car_id: i32) -> Result<Option<Car>, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        cars.filter(id.eq(car_id))
            .select(Car::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all cars, insertion order.
    pub async fn list_all(&self) -> Result<Vec<Car>, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        cars.select(Car::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a car's name in place, bumping `updated_at`.
    pub async fn update_name(&self, car_id: i32, new_name: &str) -> Result<Car, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(cars.filter(id.eq(car_id)))
            .set((name.eq(new_name), updated_at.eq(diesel::dsl::now)))
            .returning(Car::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a car by id. Returns the number of affected rows (0 or 1);
    /// deleting an absent id is not an error.
    pub async fn delete(&self, car_id: i32) -> Result<usize, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(cars.filter(id.eq(car_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Uniqueness probe for the name, optionally excluding one row (used by
    /// update so a record can keep its own unchanged name).
    pub async fn name_exists(
        &self,
        car_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        use crate::schema::cars::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = cars.filter(name.eq(car_name)).into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }

        let count: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)?;
        Ok(count > 0)
    }
}
