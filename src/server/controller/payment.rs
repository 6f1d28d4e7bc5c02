use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        payment::{PaymentDto, ProcessPaymentDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        model::payment::Payment,
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Pay for a reservation.
///
/// Charges the reservation's gross total with the chosen method. The payment provider
/// is simulated and captures immediately.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `reservation_id` - Reservation to pay for
/// - `payload` - Payment method
///
/// # Returns
/// - `201 Created` - Captured payment
/// - `404 Not Found` - Reservation not found
/// - `409 Conflict` - Reservation not pending/confirmed or already paid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/payments",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ProcessPaymentDto,
    responses(
        (status = 201, description = "Successfully captured payment", body = PaymentDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation cannot be paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_payment(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<ProcessPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .process(reservation_id, payload.method)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}/payments",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payments", body = Vec<PaymentDto>),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_payments(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payments = PaymentService::new(&state.db)
        .list_for_reservation(reservation_id)
        .await?;

    let dtos: Vec<PaymentDto> = payments.into_iter().map(Payment::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Refund a captured payment.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/refund",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Successfully refunded payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 409, description = "Payment is not captured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refund_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db).refund(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
