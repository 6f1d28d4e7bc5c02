use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::MoneyDto, string_enum};

string_enum! {
    /// Booking lifecycle: `Pending -> Confirmed -> Active -> Completed`, with
    /// `Cancelled` reachable from `Pending`/`Confirmed` and `NoShow` from `Confirmed`.
    pub enum ReservationStatus { Pending, Confirmed, Active, Completed, Cancelled, NoShow }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub reference: String,
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location_code: String,
    pub dropoff_location_code: String,
    pub rental_days: i64,
    pub total_price: MoneyDto,
    pub status: ReservationStatus,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreateReservationDto {
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location_code: String,
    /// Defaults to the pick-up location.
    pub dropoff_location_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CancelReservationDto {
    pub reason: String,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct ReservationSearchQuery {
    pub customer_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub status: Option<ReservationStatus>,
    /// Earliest pick-up date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest pick-up date, inclusive.
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "crate::model::api::default_per_page")]
    pub per_page: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
