//! Car-related DTOs for API requests and responses.

use crate::models::Car;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating or renaming a car. Both operations take the
/// same single field with the same rules.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CarPayload {
    #[validate(
        custom(function = super::validate_required_name),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    #[schema(min_length = 1, max_length = 255, example = "Tesla")]
    pub name: String,
}

impl CarPayload {
    /// The name as persisted: surrounding whitespace trimmed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// Response body for car data.
#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            created_at: car.created_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            updated_at: car.updated_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let payload = CarPayload {
            name: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let payload = CarPayload {
            name: "   ".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_oversized_name_rejected() {
        let payload = CarPayload {
            name: "x".repeat(256),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_valid_name_passes_and_trims() {
        let payload = CarPayload {
            name: "  Tesla ".to_string(),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(payload.trimmed_name(), "Tesla");
    }
}
