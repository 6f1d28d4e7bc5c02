use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{
            AddVehicleDto, MoveVehicleDto, PaginatedVehiclesDto, SetVehicleStatusDto,
            UpdateDailyRateDto, VehicleDto, VehicleSearchQuery,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::{
            value::LocationCode,
            vehicle::{positive_daily_rate, AddVehicleParams, VehicleSearchParams},
        },
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping fleet endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Add a vehicle to the fleet.
///
/// The vehicle is parked at an active location and starts out `Available`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Vehicle data including license plate, location and net daily rate
///
/// # Returns
/// - `201 Created` - Successfully added vehicle
/// - `400 Bad Request` - Invalid plate, seats, rate, or unknown/inactive location
/// - `409 Conflict` - License plate already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = AddVehicleDto,
    responses(
        (status = 201, description = "Successfully added vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 409, description = "License plate already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<AddVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AddVehicleParams::from_dto(payload)?;
    let vehicle = VehicleService::new(&state.db).add(params).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Search the fleet.
///
/// All filters are optional. When both `pickup_date` and `return_date` are given, only
/// available vehicles that are not booked in that period are returned. Results are
/// ordered by daily rate, then name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Search filters and pagination
///
/// # Returns
/// - `200 OK` - Paginated list of vehicles
/// - `400 Bad Request` - Only one period bound given, or return before pickup
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(VehicleSearchQuery),
    responses(
        (status = 200, description = "Successfully searched vehicles", body = PaginatedVehiclesDto),
        (status = 400, description = "Invalid search period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = VehicleSearchParams::from_query(query)?;
    let vehicles = VehicleService::new(&state.db).search(params).await?;

    Ok((StatusCode::OK, Json(vehicles.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Remove a vehicle from the fleet.
///
/// Refused while the vehicle is rented or referenced by a pending, confirmed or active
/// reservation.
///
/// # Returns
/// - `204 No Content` - Vehicle removed
/// - `404 Not Found` - Vehicle not found
/// - `409 Conflict` - Vehicle is rented or has open reservations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully removed vehicle"),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle is rented or has open reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update a vehicle's net daily rate.
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}/daily-rate",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = UpdateDailyRateDto,
    responses(
        (status = 200, description = "Successfully updated daily rate", body = VehicleDto),
        (status = 400, description = "Rate is not positive", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_daily_rate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDailyRateDto>,
) -> Result<impl IntoResponse, AppError> {
    let daily_rate = positive_daily_rate(payload.daily_rate_net)?;
    let vehicle = VehicleService::new(&state.db)
        .update_daily_rate(id, daily_rate)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Change a vehicle's operational status.
///
/// `Rented` is reserved for the pickup flow, and a rented vehicle can only be released
/// back to `Available`.
///
/// # Returns
/// - `200 OK` - Vehicle with its new status
/// - `404 Not Found` - Vehicle not found
/// - `409 Conflict` - Transition not allowed for a rented vehicle
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}/status",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = SetVehicleStatusDto,
    responses(
        (status = 200, description = "Successfully changed vehicle status", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetVehicleStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Move a vehicle to another active location.
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}/location",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = MoveVehicleDto,
    responses(
        (status = 200, description = "Successfully moved vehicle", body = VehicleDto),
        (status = 400, description = "Invalid location code", body = ErrorDto),
        (status = 404, description = "Vehicle or location not found", body = ErrorDto),
        (status = 409, description = "Vehicle is rented or target location is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MoveVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let location_code = LocationCode::parse(&payload.location_code)?;
    let vehicle = VehicleService::new(&state.db)
        .move_to(id, location_code.as_str())
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}
