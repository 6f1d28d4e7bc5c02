use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CancelReservationDto, CreateReservationDto, PaginatedReservationsDto, ReservationDto,
            ReservationSearchQuery,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::reservation::{
            cancellation_reason, CreateReservationParams, ReservationSearchParams,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a vehicle.
///
/// Checks the customer, the driver's license, the vehicle and both locations, rejects
/// overlapping bookings, prices the rental and stores it as `Pending`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Vehicle, customer, rental period and locations
///
/// # Returns
/// - `201 Created` - Reservation with price and booking reference
/// - `400 Bad Request` - Invalid period, license expires too early, or vehicle not at the pickup location
/// - `404 Not Found` - Customer, vehicle or location not found
/// - `409 Conflict` - Customer not active, vehicle unavailable or already booked, location inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation request", body = ErrorDto),
        (status = 404, description = "Customer, vehicle or location not found", body = ErrorDto),
        (status = 409, description = "Reservation not possible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReservationParams::from_dto(payload, Utc::now().date_naive())?;
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Search reservations.
///
/// # Returns
/// - `200 OK` - Paginated reservations, newest pickup first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(ReservationSearchQuery),
    responses(
        (status = 200, description = "Successfully searched reservations", body = PaginatedReservationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = ReservationSearchParams::from_query(query);
    let reservations = ReservationService::new(&state.db, &state.dispatcher)
        .search(&params)
        .await?;

    Ok((StatusCode::OK, Json(reservations.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservations/by-reference/{reference}",
    tag = RESERVATION_TAG,
    params(
        ("reference" = String, Path, description = "Booking reference, e.g. OCR-7KQ2M9XA")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .get_by_reference(&reference)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Confirm a pending reservation.
///
/// Sends a confirmation e-mail to the customer. A failed delivery does not fail the
/// confirmation.
///
/// # Returns
/// - `200 OK` - Confirmed reservation
/// - `404 Not Found` - Reservation not found
/// - `409 Conflict` - Reservation is not pending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/confirm",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully confirmed reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation cannot be confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .confirm(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a pending or confirmed reservation.
///
/// Captured payments are refunded and the customer is notified by e-mail.
///
/// # Returns
/// - `200 OK` - Cancelled reservation
/// - `400 Bad Request` - Reason empty or longer than 500 characters
/// - `404 Not Found` - Reservation not found
/// - `409 Conflict` - Reservation is already active or closed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = CancelReservationDto,
    responses(
        (status = 200, description = "Successfully cancelled reservation", body = ReservationDto),
        (status = 400, description = "Invalid cancellation reason", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CancelReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let reason = cancellation_reason(payload)?;
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .cancel(id, reason)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Hand over the vehicle of a confirmed reservation.
///
/// Allowed from the pickup date on. The vehicle becomes `Rented`.
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/pickup",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Vehicle picked up", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation not confirmed or pickup date not reached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pickup_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .pickup(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Take back the vehicle of an active rental.
///
/// The vehicle becomes `Available` at the drop-off location.
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/return",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Vehicle returned", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation is not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .return_vehicle(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/reservations/{id}/no-show",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation marked as no-show", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation not confirmed or pickup date not passed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_no_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.dispatcher)
        .mark_no_show(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}
