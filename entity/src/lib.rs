//! SeaORM entity models, one module per table.

pub mod prelude;

pub mod customer;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing_policy;
pub mod reservation;
pub mod vehicle;
