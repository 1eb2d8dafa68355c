//! Error-to-response mapping.
//!
//! Implements `IntoResponse` for `AppError`, the single reusable mapping
//! every handler failure path flows through. Validation-class failures
//! (including duplicates caught by the database constraint) answer 401 with
//! the field-error map, missing resources answer 404, and anything else is a
//! terminal 500 carrying the raw underlying message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;

use crate::api::dto::Envelope;
use crate::error::{AppError, ValidationFieldError};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match &self {
            AppError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Envelope::failure(self.to_string()))
            }
            AppError::Validation { field, reason } => (
                StatusCode::UNAUTHORIZED,
                Envelope::validation(single_field(field, reason)),
            ),
            AppError::ValidationErrors { errors } => (
                StatusCode::UNAUTHORIZED,
                Envelope::validation(group_by_field(errors)),
            ),
            AppError::Duplicate { field, .. } => (
                StatusCode::UNAUTHORIZED,
                Envelope::validation(single_field(field, &taken_message(field))),
            ),
            AppError::Database { .. } | AppError::ConnectionPool { .. }
            | AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(self.raw_message()),
            ),
        };

        (status, Json(envelope)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::Duplicate { .. } => StatusCode::UNAUTHORIZED,
        AppError::Database { .. } | AppError::ConnectionPool { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn single_field(field: &str, message: &str) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([(field.to_string(), vec![message.to_string()])])
}

fn group_by_field(errors: &[ValidationFieldError]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for error in errors {
        grouped
            .entry(error.field.clone())
            .or_default()
            .push(error.message.clone());
    }
    grouped
}

/// "car_id" -> "The car id has already been taken."
fn taken_message(field: &str) -> String {
    format!("The {} has already been taken.", field.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_401() {
        let error = AppError::validation("name", "The name field is required.");
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_maps_to_401() {
        let error = AppError::Duplicate {
            entity: "users".to_string(),
            field: "email".to_string(),
            value: "a@x.com".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            error_to_status_code(&AppError::not_found("Car")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unexpected_errors_map_to_500() {
        let database = AppError::Database {
            operation: "insert car".to_string(),
            source: anyhow::Error::msg("boom"),
        };
        let internal = AppError::Internal {
            source: anyhow::Error::msg("boom"),
        };
        assert_eq!(
            error_to_status_code(&database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status_code(&internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_taken_message_humanizes_field_name() {
        assert_eq!(
            taken_message("car_id"),
            "The car id has already been taken."
        );
    }

    #[test]
    fn test_group_by_field_merges_messages() {
        let errors = vec![
            ValidationFieldError {
                field: "password".to_string(),
                message: "too short".to_string(),
            },
            ValidationFieldError {
                field: "password".to_string(),
                message: "too weak".to_string(),
            },
        ];
        let grouped = group_by_field(&errors);
        assert_eq!(grouped["password"].len(), 2);
    }
}
