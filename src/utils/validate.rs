use crate::error::{AppError, AppResult};
use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Body rejections (missing fields, nulls where a value is required,
/// malformed JSON) are folded into the validation taxonomy, so a payload
/// problem and a rule violation both come back as the 401 validation
/// envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::validation("body", rejection.body_text())
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1, max = 255, message = "The name field is required."))]
        name: String,
        #[validate(email(message = "The email must be a valid email address."))]
        email: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let request = json_request(r#"{"name":"A","email":"a@x.com"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_empty_name_fails_rule() {
        let request = json_request(r#"{"name":"","email":"a@x.com"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "The name field is required.");
            }
            other => panic!("Expected ValidationErrors, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_email_fails_rule() {
        let request = json_request(r#"{"name":"A","email":"not-an-email"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("Expected ValidationErrors, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_result_extractor_defers_rejection_to_handler() {
        // Extracted as Result, a bad body reaches the handler instead of
        // rejecting the request, so the handler can order its checks
        let request = json_request(r#"{"name":"#);
        let extracted =
            <Result<ValidatedJson<TestPayload>, AppError> as FromRequest<()>>::from_request(
                request,
                &(),
            )
            .await
            .unwrap();

        match extracted {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "body"),
            other => panic!("Expected deferred Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let request = json_request(r#"{"name":"A"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::Validation { field, .. } => assert_eq!(field, "body"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_field_is_validation_error() {
        let request = json_request(r#"{"name":null,"email":"a@x.com"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::Validation { field, .. } => assert_eq!(field, "body"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }
}
