//! User-related DTOs for API requests and responses.
//!
//! The password only ever appears in request bodies; no response DTO carries
//! it, hashed or otherwise.

use crate::models::User;
use crate::services::{CreateUser, UpdateUser, UserDetail};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(
        custom(function = super::validate_required_name),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(
        email(message = "The email must be a valid email address."),
        length(min = 1, max = 255, message = "The email field is required.")
    )]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters."))]
    #[schema(format = "password", min_length = 6)]
    pub password: String,
    #[validate(must_match(
        other = "password",
        message = "The password confirmation does not match."
    ))]
    #[schema(format = "password")]
    pub password_confirmation: String,
    /// Car to attach; a dangling id is accepted and simply skips the attach
    pub car_id: i32,
}

impl CreateUserRequest {
    /// Converts the request into service input, trimming the free-text
    /// fields the way the persistence layer expects them.
    pub fn into_create_user(self) -> CreateUser {
        CreateUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            car_id: self.car_id,
        }
    }
}

/// Request body for updating a user. The association is replaced on every
/// update: omitting `car_id` detaches without re-attaching.
#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
pub struct UpdateUserRequest {
    #[validate(
        custom(function = super::validate_required_name),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,
    pub car_id: Option<i32>,
}

impl UpdateUserRequest {
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name.map(|n| n.trim().to_string()),
            car_id: self.car_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// List-item response: user fields plus the derived name of the associated
/// car, `null` when the user holds none.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub car_name: Option<String>,
}

impl From<(User, Option<String>)> for UserResponse {
    fn from((user, car_name): (User, Option<String>)) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            updated_at: user.updated_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            car_name,
        }
    }
}

/// The association row as embedded in the single-user read.
#[derive(Debug, Serialize, ToSchema)]
pub struct CarLinkResponse {
    pub user_id: i32,
    pub car_id: i32,
    pub car_name: Option<String>,
}

/// Single-user read response: user fields plus the decorated association,
/// `null` when the user holds none.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub car: Option<CarLinkResponse>,
}

impl From<UserDetail> for UserDetailResponse {
    fn from(detail: UserDetail) -> Self {
        let car = detail.ownership.map(|row| CarLinkResponse {
            user_id: row.user_id,
            car_id: row.car_id,
            car_name: detail.car_name,
        });
        Self {
            id: detail.user.id,
            name: detail.user.name,
            email: detail.user.email,
            created_at: detail
                .user
                .created_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            updated_at: detail
                .user
                .updated_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            car,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
            car_id: 1,
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.password = "abc".to_string();
        request.password_confirmation = "abc".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let mut request = valid_request();
        request.password_confirmation = "different".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password_confirmation"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut request = valid_request();
        request.name = "   ".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_update_request_allows_absent_fields() {
        let request = UpdateUserRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_whitespace_only_name() {
        let request = UpdateUserRequest {
            name: Some("   ".to_string()),
            car_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_create_user_trims_inputs() {
        let mut request = valid_request();
        request.name = " A ".to_string();
        request.email = " a@x.com ".to_string();
        let input = request.into_create_user();
        assert_eq!(input.name, "A");
        assert_eq!(input.email, "a@x.com");
    }

    #[test]
    fn test_detail_response_embeds_association() {
        use crate::models::CarOwnership;
        use crate::services::UserDetail;

        let user = sample_user();
        let detail = UserDetail {
            user,
            ownership: Some(CarOwnership {
                user_id: 2,
                car_id: 1,
            }),
            car_name: Some("Tesla".to_string()),
        };
        let response = UserDetailResponse::from(detail);
        let car = response.car.expect("association should be present");
        assert_eq!(car.car_id, 1);
        assert_eq!(car.car_name.as_deref(), Some("Tesla"));
    }

    fn sample_user() -> User {
        User {
            id: 2,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "$argon2id$hash".to_string(),
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }
}
