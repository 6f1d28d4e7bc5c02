//! Reservation factory for creating test bookings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Timestamps matching the chosen status (e.g. `confirmed_at` for `"Confirmed"`) are
/// filled in automatically.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, vehicle.id, customer.id, &location.code)
///     .period(pickup, ret)
///     .status("Confirmed")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    customer_id: i32,
    reference: String,
    pickup_date: NaiveDate,
    return_date: NaiveDate,
    pickup_location_code: String,
    dropoff_location_code: String,
    total_price_net_cents: i64,
    status: String,
    cancellation_reason: Option<String>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - reference: `"OCR-T{id}"` padded to eight characters
    /// - period: pickup in 7 days, return in 10 days
    /// - dropoff: same as pickup location
    /// - total_price_net_cents: `15000`
    /// - status: `"Pending"`
    pub fn new(
        db: &'a DatabaseConnection,
        vehicle_id: i32,
        customer_id: i32,
        location_code: impl Into<String>,
    ) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        let location_code = location_code.into();

        Self {
            db,
            vehicle_id,
            customer_id,
            reference: format!("OCR-T{:07}", id),
            pickup_date: today + Days::new(7),
            return_date: today + Days::new(10),
            pickup_location_code: location_code.clone(),
            dropoff_location_code: location_code,
            total_price_net_cents: 15000,
            status: "Pending".to_string(),
            cancellation_reason: None,
        }
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Sets the inclusive rental period.
    pub fn period(mut self, pickup_date: NaiveDate, return_date: NaiveDate) -> Self {
        self.pickup_date = pickup_date;
        self.return_date = return_date;
        self
    }

    pub fn dropoff_location_code(mut self, location_code: impl Into<String>) -> Self {
        self.dropoff_location_code = location_code.into();
        self
    }

    pub fn total_price_net_cents(mut self, cents: i64) -> Self {
        self.total_price_net_cents = cents;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn cancellation_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancellation_reason = Some(reason.into());
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        let stamp = |statuses: &[&str]| -> Option<DateTime<Utc>> {
            statuses.contains(&self.status.as_str()).then_some(now)
        };

        let confirmed_at = stamp(&["Confirmed", "Active", "Completed", "NoShow"]);
        let picked_up_at = stamp(&["Active", "Completed"]);
        let completed_at = stamp(&["Completed"]);
        let cancelled_at = stamp(&["Cancelled"]);

        entity::reservation::ActiveModel {
            reference: ActiveValue::Set(self.reference),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            customer_id: ActiveValue::Set(self.customer_id),
            pickup_date: ActiveValue::Set(self.pickup_date),
            return_date: ActiveValue::Set(self.return_date),
            pickup_location_code: ActiveValue::Set(self.pickup_location_code),
            dropoff_location_code: ActiveValue::Set(self.dropoff_location_code),
            total_price_net_cents: ActiveValue::Set(self.total_price_net_cents),
            status: ActiveValue::Set(self.status),
            cancellation_reason: ActiveValue::Set(self.cancellation_reason),
            created_at: ActiveValue::Set(now),
            confirmed_at: ActiveValue::Set(confirmed_at),
            cancelled_at: ActiveValue::Set(cancelled_at),
            picked_up_at: ActiveValue::Set(picked_up_at),
            completed_at: ActiveValue::Set(completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation one week ahead.
pub async fn create_reservation(
    db: &DatabaseConnection,
    vehicle_id: i32,
    customer_id: i32,
    location_code: &str,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, vehicle_id, customer_id, location_code)
        .build()
        .await
}
