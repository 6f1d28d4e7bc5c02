use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        customer::{self, CUSTOMER_TAG},
        health::{self, HEALTH_TAG},
        location::{self, LOCATION_TAG},
        notification::{self, NOTIFICATION_TAG},
        payment::{self, PAYMENT_TAG},
        pricing::{self, PRICING_TAG},
        reservation::{self, RESERVATION_TAG},
        vehicle::{self, VEHICLE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orange Car Rental API",
        description = "Locations, fleet, customers, pricing, reservations, payments and notifications"
    ),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = LOCATION_TAG, description = "Rental branches"),
        (name = VEHICLE_TAG, description = "Fleet management and availability search"),
        (name = CUSTOMER_TAG, description = "Customer accounts and driver's licenses"),
        (name = PRICING_TAG, description = "Pricing policies and quotes"),
        (name = RESERVATION_TAG, description = "Booking and rental lifecycle"),
        (name = PAYMENT_TAG, description = "Payments and refunds"),
        (name = NOTIFICATION_TAG, description = "E-mail and SMS notifications"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation.
///
/// Swagger UI is served at `/swagger-ui` and the generated document at
/// `/api-docs/openapi.json`. State, CORS and rate limiting are applied by the caller.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(location::get_locations, location::create_location))
        .routes(routes!(location::get_location, location::update_location))
        .routes(routes!(location::set_location_status))
        .routes(routes!(vehicle::search_vehicles, vehicle::add_vehicle))
        .routes(routes!(vehicle::get_vehicle, vehicle::remove_vehicle))
        .routes(routes!(vehicle::update_daily_rate))
        .routes(routes!(vehicle::set_vehicle_status))
        .routes(routes!(vehicle::move_vehicle))
        .routes(routes!(customer::search_customers, customer::register_customer))
        .routes(routes!(customer::find_customer_by_email))
        .routes(routes!(customer::get_customer, customer::update_customer_profile))
        .routes(routes!(customer::update_drivers_license))
        .routes(routes!(customer::change_customer_status))
        .routes(routes!(customer::get_customer_reservations))
        .routes(routes!(
            pricing::get_pricing_policies,
            pricing::create_pricing_policy
        ))
        .routes(routes!(pricing::deactivate_pricing_policy))
        .routes(routes!(pricing::calculate_price))
        .routes(routes!(
            reservation::search_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(reservation::get_reservation))
        .routes(routes!(reservation::get_reservation_by_reference))
        .routes(routes!(reservation::confirm_reservation))
        .routes(routes!(reservation::cancel_reservation))
        .routes(routes!(reservation::pickup_vehicle))
        .routes(routes!(reservation::return_vehicle))
        .routes(routes!(reservation::mark_no_show))
        .routes(routes!(
            payment::get_reservation_payments,
            payment::process_payment
        ))
        .routes(routes!(payment::get_payment))
        .routes(routes!(payment::refund_payment))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_notification))
        .routes(routes!(notification::send_email))
        .routes(routes!(notification::send_sms))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
