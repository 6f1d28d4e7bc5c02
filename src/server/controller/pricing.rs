use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        pricing::{
            CalculatePriceDto, CreatePricingPolicyDto, PriceQuoteDto, PricingPolicyDto,
            PricingPolicyQuery,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::pricing::{CalculatePriceParams, CreatePricingPolicyParams, PricingPolicy},
        service::pricing::PricingService,
        state::AppState,
    },
};

/// Tag for grouping pricing endpoints in OpenAPI documentation
pub static PRICING_TAG: &str = "pricing";

/// Create a pricing policy.
///
/// Without `location_code` the policy applies to every location. A location-specific
/// policy always takes precedence over a general one for the same category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category, optional location, net daily rate and validity range
///
/// # Returns
/// - `201 Created` - Successfully created policy
/// - `400 Bad Request` - Invalid rate or range, or unknown location
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pricing/policies",
    tag = PRICING_TAG,
    request_body = CreatePricingPolicyDto,
    responses(
        (status = 201, description = "Successfully created pricing policy", body = PricingPolicyDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pricing_policy(
    State(state): State<AppState>,
    Json(payload): Json<CreatePricingPolicyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePricingPolicyParams::from_dto(payload)?;
    let policy = PricingService::new(&state.db).create_policy(params).await?;

    Ok((StatusCode::CREATED, Json(policy.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/pricing/policies",
    tag = PRICING_TAG,
    params(PricingPolicyQuery),
    responses(
        (status = 200, description = "Successfully retrieved pricing policies", body = Vec<PricingPolicyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pricing_policies(
    State(state): State<AppState>,
    Query(query): Query<PricingPolicyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let policies = PricingService::new(&state.db)
        .list_policies(query.category, query.active_only)
        .await?;

    let dtos: Vec<PricingPolicyDto> = policies
        .into_iter()
        .map(PricingPolicy::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Deactivate a pricing policy.
///
/// The policy is kept and listed, but no longer used for quotes.
#[utoipa::path(
    delete,
    path = "/api/pricing/policies/{id}",
    tag = PRICING_TAG,
    params(
        ("id" = i32, Path, description = "Pricing policy ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated pricing policy"),
        (status = 404, description = "Pricing policy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_pricing_policy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PricingService::new(&state.db).deactivate_policy(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Quote the price of a rental.
///
/// Uses the policy in effect on the pickup date. Rental days are counted between the
/// two dates, with a minimum of one.
///
/// # Returns
/// - `200 OK` - Price quote with net, VAT and gross amounts
/// - `400 Bad Request` - Return date before pickup date
/// - `404 Not Found` - No pricing policy for the category on that date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pricing/calculate",
    tag = PRICING_TAG,
    request_body = CalculatePriceDto,
    responses(
        (status = 200, description = "Successfully calculated price", body = PriceQuoteDto),
        (status = 400, description = "Invalid rental period", body = ErrorDto),
        (status = 404, description = "No pricing policy applies", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate_price(
    State(state): State<AppState>,
    Json(payload): Json<CalculatePriceDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CalculatePriceParams::from_dto(payload)?;
    let quote = PricingService::new(&state.db).calculate_price(params).await?;

    Ok((StatusCode::OK, Json(quote.into_dto())))
}
