//! User repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, User};

/// User repository holding an async connection pool.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. The password in `new_user` must already be hashed.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by id, `None` if absent.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all users together with the name of each user's associated car,
    /// if any, via a LEFT JOIN through the association table.
    pub async fn list_with_car_name(&self) -> Result<Vec<(User, Option<String>)>, AppError> {
        use crate::schema::{cars, users, users_cars};
        let mut conn = self.pool.get().await?;

        users::table
            .left_join(users_cars::table.left_join(cars::table))
            .select((User::as_select(), cars::name.nullable()))
            .load::<(User, Option<String>)>(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a user's name in place, bumping `updated_at`.
    pub async fn update_name(&self, user_id: i32, new_name: &str) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set((name.eq(new_name), updated_at.eq(diesel::dsl::now)))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a user by id. Returns the number of affected rows (0 or 1);
    /// deleting an absent id is not an error.
    pub async fn delete(&self, user_id: i32) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(users.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Uniqueness probe for the email, optionally excluding one row.
    pub async fn email_exists(
        &self,
        user_email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = users.filter(email.eq(user_email)).into_boxed();
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
