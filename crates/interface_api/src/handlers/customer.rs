//! Customer quote handlers

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    Json,
};

use core_kernel::CustomerId;

use crate::dto::customer::{CustomerInputDto, CustomerOutputDto, CustomerWrapper};
use crate::error::ApiError;
use crate::extract::{RequestMetadata, ValidatedJson};
use crate::AppState;

/// Prices and records a quote request
///
/// The response never carries an id, and its `vehicle_value` is the premium.
pub async fn calculate_quote(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    ValidatedJson(request): ValidatedJson<CustomerWrapper>,
) -> Result<Json<CustomerOutputDto>, ApiError> {
    let quote = state
        .service
        .with_metadata(metadata)
        .calculate_insurance(request.customer.into())
        .await?;
    Ok(Json(quote.into()))
}

/// Lists every stored customer
pub async fn list_quotes(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
) -> Result<Json<Vec<CustomerOutputDto>>, ApiError> {
    let quotes = state.service.with_metadata(metadata).get_all_insurance().await?;
    Ok(Json(quotes.into_iter().map(CustomerOutputDto::from).collect()))
}

/// Gets a customer by ID
pub async fn get_quote(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
) -> Result<Json<CustomerOutputDto>, ApiError> {
    let id: CustomerId = id.parse()?;
    let quote = state.service.with_metadata(metadata).get_customer_by_id(id).await?;
    Ok(Json(quote.into()))
}

/// Replaces every field of a customer
pub async fn update_quote(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CustomerInputDto>,
) -> Result<Json<CustomerOutputDto>, ApiError> {
    let id: CustomerId = id.parse()?;
    let quote = state.service.with_metadata(metadata).update(id, request.into()).await?;
    Ok(Json(quote.into()))
}

/// Deletes a customer
pub async fn delete_quote(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: CustomerId = id.parse()?;
    state.service.with_metadata(metadata).delete(id).await?;
    Ok(StatusCode::OK)
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("No handler for this route".to_string())
}

/// Fallback for known routes called with an unsupported method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} is not supported for this route", method))
}
