//! The uniform response envelope shared by every endpoint.
//!
//! All success and failure payloads fit the shape
//! `{status, message|response, errors?}`: lists go in `response`, single
//! records / ids / confirmation strings in `message`, and field-scoped
//! validation failures in `errors`. Absent fields are omitted from the JSON.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope {
    pub status: bool,
    /// Single record, id, confirmation text, or error message
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub message: Option<Value>,
    /// Collection payload for list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub response: Option<Value>,
    /// Field-scoped validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

fn to_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl Envelope {
    /// Successful list payload, carried in `response`.
    pub fn listing<T: Serialize>(items: T) -> Self {
        Self {
            status: true,
            message: None,
            response: Some(to_value(items)),
            errors: None,
        }
    }

    /// Successful single-record payload (or id / confirmation string),
    /// carried in `message`.
    pub fn record<T: Serialize>(value: T) -> Self {
        Self {
            status: true,
            message: Some(to_value(value)),
            response: None,
            errors: None,
        }
    }

    /// The literal shape of the absent-user read: 200 with `status:false`
    /// and an explicit `message:null`.
    pub fn missing_record() -> Self {
        Self {
            status: false,
            message: Some(Value::Null),
            response: None,
            errors: None,
        }
    }

    /// Validation failure with the fixed "validation error" message and the
    /// per-field error map.
    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            status: false,
            message: Some(Value::String("validation error".to_string())),
            response: None,
            errors: Some(errors),
        }
    }

    /// Terminal failure carrying the raw error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(Value::String(message.into())),
            response: None,
            errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_uses_response_field() {
        let envelope = Envelope::listing(vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": true, "response": [1, 2, 3]}));
    }

    #[test]
    fn test_record_uses_message_field() {
        let envelope = Envelope::record(42);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": true, "message": 42}));
    }

    #[test]
    fn test_missing_record_keeps_null_message() {
        let envelope = Envelope::missing_record();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": false, "message": null}));
    }

    #[test]
    fn test_validation_shape() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "email".to_string(),
            vec!["The email has already been taken.".to_string()],
        );
        let envelope = Envelope::validation(errors);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": false,
                "message": "validation error",
                "errors": {"email": ["The email has already been taken."]}
            })
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let value = serde_json::to_value(Envelope::failure("boom")).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("response"));
        assert!(!object.contains_key("errors"));
    }
}
