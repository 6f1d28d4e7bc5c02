//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a location with one available vehicle parked there.
///
/// # Returns
/// - `Ok((location, vehicle))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vehicle_with_location(
    db: &DatabaseConnection,
) -> Result<(entity::location::Model, entity::vehicle::Model), DbErr> {
    let location = crate::factory::location::create_location(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, &location.code).await?;

    Ok((location, vehicle))
}

/// Creates a complete booking with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Location
/// 2. Vehicle parked at the location
/// 3. Customer
/// 4. Pending reservation one week ahead
///
/// # Returns
/// - `Ok((location, vehicle, customer, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::location::Model,
        entity::vehicle::Model,
        entity::customer::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (location, vehicle) = create_vehicle_with_location(db).await?;
    let customer = crate::factory::customer::create_customer(db).await?;
    let reservation = crate::factory::reservation::create_reservation(
        db,
        vehicle.id,
        customer.id,
        &location.code,
    )
    .await?;

    Ok((location, vehicle, customer, reservation))
}
