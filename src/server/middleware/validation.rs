//! JSON extractor that validates the request body.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::AppError;

/// Deserializes the request body as JSON and runs its `validator` rules.
///
/// Malformed JSON is rejected with `AppError::BadRequest`, failed rules with
/// `AppError::Validation`. Both become 400 responses.
///
/// ```ignore
/// async fn sign_up(ValidatedJson(payload): ValidatedJson<SignUpDto>) -> Result<Response, AppError> {
///     // payload already passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
