//! HTTP API Layer
//!
//! This crate provides the REST API for the vehicle insurance quote service
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for quotes and health
//! - **Middleware**: Request ids, request logging, and error path stamping
//! - **DTOs**: Wire shapes with `validator` rules
//! - **Error Handling**: Uniform `{status, error, message, path}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use domain_customer::CustomerService;

use crate::config::ApiConfig;
use crate::middleware::{error_path_middleware, request_logging_middleware};
use crate::handlers::{customer, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Customer service bound to the selected store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: CustomerService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let customer_routes = Router::new()
        .route("/quote", post(customer::calculate_quote))
        .route("/quotes", get(customer::list_quotes))
        .route(
            "/quote/:id",
            get(customer::get_quote).put(customer::update_quote),
        )
        .route("/quotes/:id", delete(customer::delete_quote))
        .method_not_allowed_fallback(customer::method_not_allowed);

    Router::new()
        .merge(health_routes)
        .nest("/customers", customer_routes)
        .fallback(customer::route_not_found)
        .method_not_allowed_fallback(customer::method_not_allowed)
        .layer(axum_middleware::from_fn(error_path_middleware))
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
