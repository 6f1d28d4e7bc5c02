use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        customer::{
            ChangeCustomerStatusDto, CustomerDto, CustomerSearchQuery, DriversLicenseDto,
            PaginatedCustomersDto, RegisterCustomerDto, UpdateCustomerProfileDto,
        },
        reservation::ReservationDto,
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::{
            customer::{
                CustomerSearchParams, DriversLicense, RegisterCustomerParams,
                UpdateCustomerProfileParams,
            },
            reservation::Reservation,
        },
        service::{customer::CustomerService, reservation::ReservationService},
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Register a new customer.
///
/// The customer must be at least 18 years old today and hold a driver's license that
/// was issued in the past and has not expired.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Personal data, address and driver's license
///
/// # Returns
/// - `201 Created` - Successfully registered customer
/// - `400 Bad Request` - Invalid personal data, too young, or invalid license
/// - `409 Conflict` - E-mail address already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Successfully registered customer", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 409, description = "E-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterCustomerParams::from_dto(payload, Utc::now().date_naive())?;
    let customer = CustomerService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// Search customers by name fragment, e-mail fragment and status.
///
/// # Returns
/// - `200 OK` - Paginated customers ordered by last name, then first name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(CustomerSearchQuery),
    responses(
        (status = 200, description = "Successfully searched customers", body = PaginatedCustomersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = CustomerSearchParams::from_query(query);
    let customers = CustomerService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(customers.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/customers/by-email/{email}",
    tag = CUSTOMER_TAG,
    params(
        ("email" = String, Path, description = "E-mail address, case-insensitive")
    ),
    responses(
        (status = 200, description = "Successfully found customer", body = CustomerDto),
        (status = 400, description = "Malformed e-mail address", body = ErrorDto),
        (status = 404, description = "No customer with that e-mail", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_customer_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db).find_by_email(&email).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved customer", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Update a customer's name, contact details and address.
///
/// A changed e-mail address must not belong to another customer.
///
/// # Returns
/// - `200 OK` - The updated customer
/// - `400 Bad Request` - Invalid profile data
/// - `404 Not Found` - Customer not found
/// - `409 Conflict` - E-mail already registered by another customer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerProfileDto,
    responses(
        (status = 200, description = "Successfully updated customer", body = CustomerDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "E-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCustomerProfileParams::from_dto(payload)?;
    let customer = CustomerService::new(&state.db)
        .update_profile(id, params)
        .await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Replace a customer's driver's license.
///
/// The same rules as on registration apply.
#[utoipa::path(
    put,
    path = "/api/customers/{id}/license",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = DriversLicenseDto,
    responses(
        (status = 200, description = "Successfully updated driver's license", body = CustomerDto),
        (status = 400, description = "Invalid driver's license", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drivers_license(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DriversLicenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let license = DriversLicense::from_dto(payload, Utc::now().date_naive())?;
    let customer = CustomerService::new(&state.db)
        .update_drivers_license(id, license)
        .await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}/status",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = ChangeCustomerStatusDto,
    responses(
        (status = 200, description = "Successfully changed customer status", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_customer_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeCustomerStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db)
        .change_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Get a customer's reservation history, newest pickup first.
#[utoipa::path(
    get,
    path = "/api/customers/{id}/reservations",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = Vec<ReservationDto>),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_reservations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db, &state.dispatcher)
        .customer_reservations(id)
        .await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
