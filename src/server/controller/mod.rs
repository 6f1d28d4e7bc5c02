//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated params, call a service and map the
//! resulting domain model back to a DTO. Every handler carries a `utoipa::path`
//! annotation and is registered in the router through `utoipa_axum::routes!`.

pub mod customer;
pub mod health;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod vehicle;
