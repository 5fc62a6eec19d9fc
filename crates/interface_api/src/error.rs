//! API error handling
//!
//! Every failure leaves the API as the same JSON body:
//! `{status, error, message, path}`. Handlers do not know the request path,
//! so the body is stashed in the response extensions and
//! [`error_path_middleware`](crate::middleware::error_path_middleware)
//! fills the path in on the way out.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::CoreError;
use domain_customer::CustomerError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    /// HTTP reason phrase
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: String::new(),
        }
    }

    /// Returns the body with the request path set
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self.clone())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self.status(), self.to_string()).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::InvalidInput(msg) => ApiError::BadRequest(msg),
            CustomerError::NotFound(msg) => ApiError::NotFound(msg),
            CustomerError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ApiError::BadRequest(msg),
            CoreError::NotFound(msg) => ApiError::NotFound(msg),
            CoreError::Configuration(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;

    #[test]
    fn test_customer_errors_map_to_status() {
        let invalid: ApiError = CustomerError::invalid_input("bad").into();
        let missing: ApiError = CustomerError::not_found().into();
        let store: ApiError = CustomerError::from(PortError::internal("boom")).into();

        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Customer not found");
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_method_not_allowed_status() {
        let error = ApiError::MethodNotAllowed("Method not allowed".into());
        let body = ErrorResponse::new(error.status(), error.to_string());

        assert_eq!(body.status, 405);
        assert_eq!(body.error, "Method Not Allowed");
    }

    #[test]
    fn test_error_response_uses_reason_phrase() {
        let body = ErrorResponse::new(StatusCode::NOT_FOUND, "Customer not found")
            .with_path("/customers/quote/9");

        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.path, "/customers/quote/9");
    }

    #[test]
    fn test_into_response_stashes_body() {
        let response = ApiError::BadRequest("Invalid vehicle value or location".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.message, "Invalid vehicle value or location");
        assert!(body.path.is_empty());
    }
}
