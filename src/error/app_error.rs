use crate::error::DatabaseErrorConverter;
use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, as reported in the `errors` map
/// of the response envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type covering every failure a request can hit.
///
/// The taxonomy is intentionally small: validation failures (including
/// duplicates caught either by a pre-insert probe or by the database
/// constraint), missing resources, and everything else as an unexpected
/// storage/internal error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource lookup by id came up empty
    #[error("{entity} Not Found")]
    NotFound { entity: String },

    /// Unique constraint violation, from the probe or from the database
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Single-field validation failure
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple field validation failures from the request DTO
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a `NotFound` on the given entity name ("Car", "User").
    pub fn not_found(entity: &str) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
        }
    }

    /// Shorthand for a single-field validation failure.
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// The raw underlying message surfaced in 500 responses.
    pub fn raw_message(&self) -> String {
        match self {
            AppError::Database { source, .. }
            | AppError::ConnectionPool { source }
            | AppError::Internal { source } => source.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<diesel_async::pooled_connection::bb8::RunError> for AppError {
    fn from(error: diesel_async::pooled_connection::bb8::RunError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors
                    .iter()
                    .map(move |error| ValidationFieldError {
                        field: field.clone(),
                        message: error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("The {field} field is invalid.")),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        AppError::ValidationErrors { errors }
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AppError::Internal {
            source: anyhow::Error::msg(error.to_string()),
        }
    }
}

// PHC-string parsing has its own error type, distinct from the hashing one
impl From<argon2::password_hash::phc::Error> for AppError {
    fn from(error: argon2::password_hash::phc::Error) -> Self {
        AppError::Internal {
            source: anyhow::Error::msg(error.to_string()),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = AppError::not_found("Car");
        assert_eq!(error.to_string(), "Car Not Found");
    }

    #[test]
    fn test_raw_message_unwraps_internal_source() {
        let error = AppError::Internal {
            source: anyhow::Error::msg("connection reset by peer"),
        };
        assert_eq!(error.raw_message(), "connection reset by peer");
    }

    #[test]
    fn test_validator_errors_are_flattened_per_field() {
        use validator::Validate;

        #[derive(Validate)]
        struct Payload {
            #[validate(length(min = 1, max = 255, message = "The name field is required."))]
            name: String,
        }

        let payload = Payload {
            name: String::new(),
        };
        let error = AppError::from(payload.validate().unwrap_err());

        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "The name field is required.");
            }
            other => panic!("Expected ValidationErrors, got {other:?}"),
        }
    }
}
