//! Request extractors that report failures through [`AppError`].

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and then validated.
///
/// Malformed or mistyped bodies become [`AppError::BadRequest`]; failed
/// `Validate` rules become [`AppError::ValidationError`]. Both render the
/// `{"detail": ...}` envelope with status 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
