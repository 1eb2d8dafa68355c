//! Car service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{Car, NewCar};
use crate::repositories::CarRepository;

/// Business-level car operations on top of `CarRepository`.
///
/// Name uniqueness is checked here as part of the validation pass; the
/// database unique constraint on `cars.name` backstops the check under
/// concurrent creates.
#[derive(Clone)]
pub struct CarService {
    repo: CarRepository,
}

impl CarService {
    pub fn new(repo: CarRepository) -> Self {
        Self { repo }
    }

    /// Creates a car from an already shape-validated, trimmed name.
    pub async fn create_car(&self, name: &str) -> AppResult<Car> {
        if self.repo.name_exists(name, None).await? {
            return Err(AppError::Duplicate {
                entity: "cars".to_string(),
                field: "name".to_string(),
                value: name.to_string(),
            });
        }
        self.repo
            .create(NewCar {
                name: name.to_string(),
            })
            .await
    }

    /// The car with the given id, or `NotFound`.
    pub async fn get_car(&self, id: i32) -> AppResult<Car> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Car"))
    }

    pub async fn list_cars(&self) -> AppResult<Vec<Car>> {
        self.repo.list_all().await
    }

    /// Renames a car. Uniqueness is re-checked excluding the row being
    /// updated, so an unchanged name never self-rejects.
    pub async fn update_car(&self, id: i32, name: &str) -> AppResult<Car> {
        self.get_car(id).await?;
        if self.repo.name_exists(name, Some(id)).await? {
            return Err(AppError::Duplicate {
                entity: "cars".to_string(),
                field: "name".to_string(),
                value: name.to_string(),
            });
        }
        self.repo.update_name(id, name).await
    }

    /// Deletes a car; the association row, if any, goes with it via the
    /// cascading foreign key. Absent ids are an idempotent no-op success.
    pub async fn delete_car(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
