//! JSON body extractor with enveloped rejections
//!
//! Typed body extraction whose failure path produces the same
//! field-level 400 envelope as the validation layer. Without this,
//! a malformed date string in a create payload would surface axum's
//! plain-text 422 instead of the unified error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::utils::{AppError, FieldError};

/// JSON request body; rejects with [`AppError`] instead of axum's
/// default plain-text response.
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation_fields(vec![field_error(&rejection)])),
        }
    }
}

fn field_error(rejection: &JsonRejection) -> FieldError {
    let text = rejection.body_text();
    if let Some((field, message)) = split_serde_path(&text) {
        return FieldError::new(field, message);
    }
    // Syntax errors and missing content types have no field to blame
    FieldError::new("body", text)
}

/// Pull the offending field out of a deserialization rejection.
///
/// Data errors carry the serde path after the fixed prefix, e.g.
/// `Failed to deserialize the JSON body into the target type:
/// checkin: input contains invalid characters`.
fn split_serde_path(text: &str) -> Option<(&str, &str)> {
    let (_, rest) = text.split_once("target type: ")?;
    let (path, message) = rest.split_once(": ")?;
    let field = path.rsplit('.').next().unwrap_or(path);
    Some((field, message))
}
