//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the rules that span more than one aggregate
//! - **Orchestration**: Coordinating repositories, payments and notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services borrow the database connection for the duration of a request and are
//! constructed per call, e.g. `ReservationService::new(&state.db, &state.dispatcher)`.

pub mod customer;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod vehicle;

#[cfg(test)]
mod test;
