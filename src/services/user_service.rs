//! User service for business logic operations.
//!
//! Coordinates the user repository with the ownership service so that every
//! create/update keeps the at-most-one-car-per-user contract.

use crate::error::{AppError, AppResult};
use crate::models::{CarOwnership, NewUser, User};
use crate::repositories::UserRepository;
use crate::services::OwnershipService;
use crate::utils::password::hash_password;

/// Validated input for user creation. The password is still plain text here
/// and gets hashed before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub car_id: i32,
}

/// Validated input for user update. Absent fields are left untouched, except
/// the association, which is always replaced.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub car_id: Option<i32>,
}

/// A user decorated with their association row and the derived car name.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub ownership: Option<CarOwnership>,
    pub car_name: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    ownership: OwnershipService,
}

impl UserService {
    pub fn new(repo: UserRepository, ownership: OwnershipService) -> Self {
        Self { repo, ownership }
    }

    /// Creates a user and attaches the requested car.
    ///
    /// The duplicate checks on email and car_id run in the same validation
    /// pass, before any row is written. A car_id that references no existing
    /// Car passes validation and simply skips the attach.
    pub async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        if self.repo.email_exists(&input.email, None).await? {
            return Err(AppError::Duplicate {
                entity: "users".to_string(),
                field: "email".to_string(),
                value: input.email.clone(),
            });
        }
        if self.ownership.car_id_taken(input.car_id).await? {
            return Err(AppError::validation(
                "car_id",
                "The car id has already been taken.",
            ));
        }

        let hashed = hash_password(&input.password)?;
        let user = self
            .repo
            .create(NewUser {
                name: input.name,
                email: input.email,
                password: hashed,
            })
            .await?;

        self.ownership.attach_on_create(user.id, input.car_id).await?;
        Ok(user)
    }

    /// The bare user row, or `NotFound`.
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    /// The user with their association and derived car name, `None` when the
    /// id is absent. The absent case is not an error: the read endpoint
    /// answers 200 either way.
    pub async fn get_user_detail(&self, id: i32) -> AppResult<Option<UserDetail>> {
        let Some(user) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let ownership = self.ownership.ownership_for(user.id).await?;
        let car_name = match &ownership {
            Some(row) => self.ownership.car_name_for(row.car_id).await?,
            None => None,
        };
        Ok(Some(UserDetail {
            user,
            ownership,
            car_name,
        }))
    }

    /// All users, each with the derived name of their associated car.
    pub async fn list_users(&self) -> AppResult<Vec<(User, Option<String>)>> {
        self.repo.list_with_car_name().await
    }

    /// Updates the user's name when provided and always replaces the
    /// association (detach-all, then attach when the referenced Car exists).
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<i32> {
        let user = self.get_user(id).await?;

        if let Some(name) = input.name {
            self.repo.update_name(user.id, &name).await?;
        }
        self.ownership.replace(user.id, input.car_id).await?;
        Ok(user.id)
    }

    /// Deletes a user; cascades remove the association row. Absent ids are an
    /// idempotent no-op success.
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
