//! API middleware

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::ErrorResponse;

/// Request logging middleware
///
/// Emits one event per request once the response is ready.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "API request"
    );

    response
}

/// Fills the request path into error bodies and logs them
pub async fn error_path_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    match response.extensions().get::<ErrorResponse>() {
        Some(body) => {
            let body = body.clone().with_path(path);
            error!(
                status = body.status,
                path = %body.path,
                message = %body.message,
                "Request failed"
            );
            body.into_response()
        }
        None => response,
    }
}
