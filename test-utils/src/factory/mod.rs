//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they depend on, and the
//! `helpers` module creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let location = factory::create_location(&db).await?;
//!     let customer = factory::create_customer(&db).await?;
//!
//!     // Create with all dependencies
//!     let (location, vehicle, customer, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let vehicle = factory::vehicle::VehicleFactory::new(&db, &location.code)
//!     .category("Suv")
//!     .seats(7)
//!     .daily_rate_net_cents(8900)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `location` - Rental branches
//! - `vehicle` - Fleet vehicles
//! - `customer` - Customers with address and driver's license
//! - `pricing_policy` - Daily rates per category
//! - `reservation` - Bookings
//! - `payment` - Payments for a reservation
//! - `notification` - Stored e-mail and SMS notifications
//! - `helpers` - ID generation and dependency chains

pub mod customer;
pub mod helpers;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing_policy;
pub mod reservation;
pub mod vehicle;

pub use customer::create_customer;
pub use location::create_location;
pub use notification::create_notification;
pub use payment::create_payment;
pub use pricing_policy::create_pricing_policy;
pub use reservation::create_reservation;
pub use vehicle::create_vehicle;
