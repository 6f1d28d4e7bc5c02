use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        notification::{
            NotificationDto, NotificationQuery, PaginatedNotificationsDto, SendEmailDto,
            SendSmsDto,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::notification::{NotificationSearchParams, OutgoingMessage},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Send an e-mail.
///
/// The message is stored before delivery. The response reflects the delivery outcome:
/// `Sent`, or `Failed` with the error text.
///
/// # Returns
/// - `201 Created` - Stored notification with delivery status
/// - `400 Bad Request` - Invalid recipient or empty subject/body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications/email",
    tag = NOTIFICATION_TAG,
    request_body = SendEmailDto,
    responses(
        (status = 201, description = "Notification stored and dispatched", body = NotificationDto),
        (status = 400, description = "Invalid e-mail", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_email(
    State(state): State<AppState>,
    Json(payload): Json<SendEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = OutgoingMessage::from_email_dto(payload)?;
    let notification = NotificationService::new(&state.db, &state.dispatcher)
        .send(message)
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Send an SMS of at most 160 characters.
#[utoipa::path(
    post,
    path = "/api/notifications/sms",
    tag = NOTIFICATION_TAG,
    request_body = SendSmsDto,
    responses(
        (status = 201, description = "Notification stored and dispatched", body = NotificationDto),
        (status = 400, description = "Invalid phone number or body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_sms(
    State(state): State<AppState>,
    Json(payload): Json<SendSmsDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = OutgoingMessage::from_sms_dto(payload)?;
    let notification = NotificationService::new(&state.db, &state.dispatcher)
        .send(message)
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationQuery),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = PaginatedNotificationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = NotificationSearchParams::from_query(query);
    let notifications = NotificationService::new(&state.db, &state.dispatcher)
        .list(&params)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notification", body = NotificationDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let notification = NotificationService::new(&state.db, &state.dispatcher)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}
