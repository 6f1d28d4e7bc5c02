use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::MoneyDto, string_enum};

string_enum! {
    /// Rental category; pricing policies are defined per category.
    pub enum VehicleCategory { Economy, Compact, MidSize, FullSize, Suv, Van, Luxury }
}

string_enum! {
    pub enum FuelType { Petrol, Diesel, Electric, Hybrid }
}

string_enum! {
    pub enum Transmission { Manual, Automatic }
}

string_enum! {
    /// Operational state of a vehicle in the fleet.
    pub enum VehicleStatus { Available, Rented, Maintenance, OutOfService }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub category: VehicleCategory,
    pub license_plate: String,
    pub location_code: String,
    pub seats: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub daily_rate: MoneyDto,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct AddVehicleDto {
    pub name: String,
    pub category: VehicleCategory,
    pub license_plate: String,
    pub location_code: String,
    pub seats: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    /// Net daily rate in EUR, VAT is added on top.
    pub daily_rate_net: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UpdateDailyRateDto {
    pub daily_rate_net: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SetVehicleStatusDto {
    pub status: VehicleStatus,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MoveVehicleDto {
    pub location_code: String,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct VehicleSearchQuery {
    pub location_code: Option<String>,
    pub category: Option<VehicleCategory>,
    pub min_seats: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub status: Option<VehicleStatus>,
    /// Together with `return_date`, restricts results to vehicles free in that period.
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "crate::model::api::default_per_page")]
    pub per_page: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedVehiclesDto {
    pub vehicles: Vec<VehicleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
