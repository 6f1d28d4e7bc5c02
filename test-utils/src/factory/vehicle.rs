//! Vehicle factory for creating test fleet vehicles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Enum-valued columns take the stored spelling, e.g. `"Compact"` or `"Rented"`.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    location_code: String,
    name: String,
    category: String,
    license_plate: String,
    seats: i32,
    fuel_type: String,
    transmission: String,
    daily_rate_net_cents: i64,
    status: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"`
    /// - category: `"Compact"`, 5 seats, petrol, manual
    /// - license_plate: `"B-OC {n}"` derived from the counter
    /// - daily_rate_net_cents: `5000`
    /// - status: `"Available"`
    pub fn new(db: &'a DatabaseConnection, location_code: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            location_code: location_code.into(),
            name: format!("Vehicle {}", id),
            category: "Compact".to_string(),
            license_plate: format!("B-OC {}", id % 9999 + 1),
            seats: 5,
            fuel_type: "Petrol".to_string(),
            transmission: "Manual".to_string(),
            daily_rate_net_cents: 5000,
            status: "Available".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    pub fn fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn daily_rate_net_cents(mut self, cents: i64) -> Self {
        self.daily_rate_net_cents = cents;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();

        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            license_plate: ActiveValue::Set(self.license_plate),
            location_code: ActiveValue::Set(self.location_code),
            seats: ActiveValue::Set(self.seats),
            fuel_type: ActiveValue::Set(self.fuel_type),
            transmission: ActiveValue::Set(self.transmission),
            daily_rate_net_cents: ActiveValue::Set(self.daily_rate_net_cents),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available compact vehicle at the given location.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    location_code: &str,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, location_code).build().await
}
