//! JSON body extractors.

use axum::{
    async_trait,
    body::HttpBody,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Undecodable bodies become `InvalidArgument`, so they are rendered by the
/// same error translator as every other failure. Constraint checks are left
/// to the service.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_argument(e.body_text()))?;

        Ok(JsonBody(value))
    }
}

/// JSON extractor for a body that may be missing.
///
/// A zero-length body and a literal `null` both yield `None`, whatever the
/// content type.
pub struct OptionalJsonBody<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.body().size_hint().exact() == Some(0) {
            return Ok(OptionalJsonBody(None));
        }

        let JsonBody(value) = JsonBody::<Option<T>>::from_request(req, state).await?;
        Ok(OptionalJsonBody(value))
    }
}
