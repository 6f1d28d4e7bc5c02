use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        location::{
            CreateLocationDto, LocationDto, LocationQuery, PaginatedLocationsDto,
            SetLocationStatusDto, UpdateLocationDto,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::{
            clamp_per_page,
            location::{CreateLocationParams, UpdateLocationParams},
        },
        service::location::LocationService,
        state::AppState,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

/// Create a new rental location.
///
/// Validates the address and contact details and opens the branch as `Active`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Location code, name, address, contact details and opening hours
///
/// # Returns
/// - `201 Created` - Successfully created location
/// - `400 Bad Request` - Invalid code, postal code, phone number or e-mail
/// - `409 Conflict` - A location with the same code already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Successfully created location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 409, description = "Location code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateLocationParams::from_dto(payload)?;
    let location = LocationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Get paginated locations ordered by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `active_only` filter and pagination
///
/// # Returns
/// - `200 OK` - Paginated list of locations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    params(LocationQuery),
    responses(
        (status = 200, description = "Successfully retrieved locations", body = PaginatedLocationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let locations = LocationService::new(&state.db)
        .list(query.active_only, query.page, clamp_per_page(query.per_page))
        .await?;

    Ok((StatusCode::OK, Json(locations.into_dto())))
}

/// Get a location by its code.
///
/// # Returns
/// - `200 OK` - The location
/// - `404 Not Found` - No location with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/locations/{code}",
    tag = LOCATION_TAG,
    params(
        ("code" = String, Path, description = "Location code, e.g. BER-HBF")
    ),
    responses(
        (status = 200, description = "Successfully retrieved location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let location = LocationService::new(&state.db)
        .get(&code.to_uppercase())
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Update a location's name, address, contact details and opening hours.
///
/// # Returns
/// - `200 OK` - The updated location
/// - `400 Bad Request` - Invalid location data
/// - `404 Not Found` - No location with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/locations/{code}",
    tag = LOCATION_TAG,
    params(
        ("code" = String, Path, description = "Location code")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Successfully updated location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateLocationParams::from_dto(&code, payload)?;
    let location = LocationService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Activate or deactivate a location.
///
/// A location cannot be deactivated while one of its vehicles is rented out.
///
/// # Returns
/// - `200 OK` - The location with its new status
/// - `404 Not Found` - No location with that code
/// - `409 Conflict` - Vehicles of this location are currently rented
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/locations/{code}/status",
    tag = LOCATION_TAG,
    params(
        ("code" = String, Path, description = "Location code")
    ),
    request_body = SetLocationStatusDto,
    responses(
        (status = 200, description = "Successfully changed location status", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Location still has rented vehicles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_location_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<SetLocationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let location = LocationService::new(&state.db)
        .set_status(&code.to_uppercase(), payload.status)
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}
