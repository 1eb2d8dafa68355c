use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Converts Diesel database errors into structured AppError variants.
///
/// Unique violations become `Duplicate` so that an insert losing a race still
/// reports as a validation failure, exactly like the pre-insert probe would
/// have. Everything unrecognized stays a `Database` error.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::not_found("resource"),
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                match ConstraintParser::parse_unique_violation(message, constraint_name) {
                    Some((entity, field, value)) => AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                    None => AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {message}"
                        )),
                    },
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                match ConstraintParser::parse_not_null_violation(message) {
                    Some((entity, field)) => AppError::Validation {
                        field,
                        reason: format!("Field is required for {entity}"),
                    },
                    None => AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Not null constraint violation: {message}"
                        )),
                    },
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                match ConstraintParser::parse_foreign_key_violation(message) {
                    Some((entity, field)) => AppError::Validation {
                        field,
                        reason: format!("Invalid reference from {entity}"),
                    },
                    None => AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Foreign key constraint violation: {message}"
                        )),
                    },
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {message}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_not_found_error() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find");
        match result {
            AppError::NotFound { entity } => assert_eq!(entity, "resource"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_unique_violation_on_email() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(a@x.com) already exists.".to_string(),
            constraint_name: Some("users_email_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "insert user") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "users");
                assert_eq!(field, "email");
                assert_eq!(value, "a@x.com");
            }
            other => panic!("Expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_unique_violation_on_association_car_id() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"users_cars_car_id_key\"\nDETAIL: Key (car_id)=(7) already exists.".to_string(),
            constraint_name: Some("users_cars_car_id_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "attach car") {
            AppError::Duplicate { entity, field, .. } => {
                assert_eq!(entity, "users_cars");
                assert_eq!(field, "car_id");
            }
            other => panic!("Expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_not_null_violation() {
        let info = MockDatabaseErrorInfo {
            message: "null value in column \"name\" violates not-null constraint".to_string(),
            constraint_name: None,
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "insert car") {
            AppError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_unrecognized_error_stays_database() {
        let info = MockDatabaseErrorInfo {
            message: "deadlock detected".to_string(),
            constraint_name: None,
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "update user") {
            AppError::Database { operation, .. } => assert_eq!(operation, "update user"),
            other => panic!("Expected Database, got {other:?}"),
        }
    }
}
