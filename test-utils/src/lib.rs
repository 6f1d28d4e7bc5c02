//! Orange Car Rental Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the rental
//! back end. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for every entity.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::{Location, Vehicle};
//!
//! #[tokio::test]
//! async fn test_vehicle_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_table(Location)
//!         .with_table(Vehicle)
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let location = factory::create_location(db).await?;
//!     let vehicle = factory::create_vehicle(db, &location.code).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
