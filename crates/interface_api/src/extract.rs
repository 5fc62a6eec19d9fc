//! Request extractors

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tower_http::request_id::RequestId;
use validator::Validate;

use core_kernel::OperationMetadata;

use crate::error::ApiError;

/// JSON body that has passed its `validator` rules
///
/// Malformed JSON and rule violations are both reported as 400 with the
/// uniform error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(Self(value))
    }
}

/// Store-call metadata for the current request
///
/// The correlation id is the `x-request-id` assigned by `SetRequestIdLayer`,
/// or the one the client sent.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata(pub OperationMetadata);

#[async_trait]
impl<S> FromRequestParts<S> for RequestMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let metadata = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .map(OperationMetadata::with_correlation_id)
            .unwrap_or_default()
            .with_context("path", parts.uri.path());

        Ok(Self(metadata))
    }
}
