//! JSON body extractors
//!
//! `JsonBody` only deserializes; services validate once they have looked up
//! the record being changed. `ValidatedJson` also runs the `validator` rules.
//! A field of the wrong JSON type is reported against that field.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use onestream_service::ServiceError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::response::ApiError;

const NOT_AN_OBJECT_MESSAGE: &str = "The request body must be a JSON object.";
const MALFORMED_JSON_MESSAGE: &str = "The request body is not valid JSON.";

/// Deserialized JSON body with per-field type errors
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| match e {
                JsonRejection::JsonSyntaxError(_) => ApiError::invalid_body(MALFORMED_JSON_MESSAGE),
                JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
                JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
                _ => ApiError::invalid_body(MALFORMED_JSON_MESSAGE),
            })?;

        serde_path_to_error::deserialize(value)
            .map(JsonBody)
            .map_err(data_error)
    }
}

/// JSON body that also passed its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value.validate().map_err(ServiceError::from)?;

        Ok(ValidatedJson(value))
    }
}

fn data_error(err: serde_path_to_error::Error<serde_json::Error>) -> ApiError {
    let detail = err.inner().to_string();

    if let Some(field) = missing_field(&detail) {
        let message = format!("The {} field is required.", field.replace('_', " "));
        return ServiceError::field(field, message).into();
    }

    let field = err.path().to_string();
    if field == "." {
        return ApiError::invalid_body(NOT_AN_OBJECT_MESSAGE);
    }

    let message = type_message(&field, &detail);
    ServiceError::field(field, message).into()
}

/// Field name out of serde's "missing field `name`"
fn missing_field(detail: &str) -> Option<&str> {
    detail
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

fn type_message(field: &str, detail: &str) -> String {
    let label = field.replace('_', " ");
    let expected = detail.split("expected ").nth(1).unwrap_or_default();

    if ["i64", "u64", "i32", "u32"].iter().any(|t| expected.starts_with(t)) {
        format!("The {label} field must be an integer.")
    } else if expected.starts_with("a string") {
        format!("The {label} field must be a string.")
    } else {
        format!("The {label} field is invalid.")
    }
}
