//! Domain models for fleet vehicles.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;

use crate::{
    model::vehicle::{
        AddVehicleDto, FuelType, PaginatedVehiclesDto, Transmission, VehicleCategory, VehicleDto,
        VehicleSearchQuery, VehicleStatus,
    },
    server::{
        error::domain::DomainError,
        model::{
            clamp_per_page,
            money::Money,
            parse_column,
            value::{required_text, LicensePlate, LocationCode},
            Page,
        },
    },
};

const MAX_VEHICLE_NAME_LENGTH: usize = 100;
const MIN_SEATS: i32 = 1;
const MAX_SEATS: i32 = 9;

/// A rentable vehicle with its current branch and operational status.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub category: VehicleCategory,
    pub license_plate: String,
    pub location_code: String,
    pub seats: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub daily_rate: Money,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Converts an entity model to a vehicle domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored enum value or amount could not be parsed
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, DbErr> {
        Ok(Self {
            category: parse_column("vehicle.category", &entity.category)?,
            fuel_type: parse_column("vehicle.fuel_type", &entity.fuel_type)?,
            transmission: parse_column("vehicle.transmission", &entity.transmission)?,
            status: parse_column("vehicle.status", &entity.status)?,
            daily_rate: Money::from_net_cents(entity.daily_rate_net_cents)
                .map_err(|e| DbErr::Custom(format!("Invalid vehicle.daily_rate: {}", e)))?,
            id: entity.id,
            name: entity.name,
            license_plate: entity.license_plate,
            location_code: entity.location_code,
            seats: entity.seats,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_rented(&self) -> bool {
        self.status == VehicleStatus::Rented
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            category: self.category,
            license_plate: self.license_plate,
            location_code: self.location_code,
            seats: self.seats,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            daily_rate: self.daily_rate.into_dto(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validates a net daily rate, which must be strictly positive.
pub fn positive_daily_rate(net: Decimal) -> Result<Money, DomainError> {
    let rate = Money::from_net(net)?;

    if rate.is_zero() {
        return Err(DomainError::validation("Daily rate must be greater than zero"));
    }

    Ok(rate)
}

/// Parameters for adding a vehicle to the fleet.
#[derive(Debug, Clone)]
pub struct AddVehicleParams {
    pub name: String,
    pub category: VehicleCategory,
    pub license_plate: LicensePlate,
    pub location_code: LocationCode,
    pub seats: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub daily_rate: Money,
}

impl AddVehicleParams {
    pub fn from_dto(dto: AddVehicleDto) -> Result<Self, DomainError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&dto.seats) {
            return Err(DomainError::validation(format!(
                "Seats must be between {} and {}",
                MIN_SEATS, MAX_SEATS
            )));
        }

        Ok(Self {
            name: required_text("Vehicle name", &dto.name, MAX_VEHICLE_NAME_LENGTH)?,
            category: dto.category,
            license_plate: LicensePlate::parse(&dto.license_plate)?,
            location_code: LocationCode::parse(&dto.location_code)?,
            seats: dto.seats,
            fuel_type: dto.fuel_type,
            transmission: dto.transmission,
            daily_rate: positive_daily_rate(dto.daily_rate_net)?,
        })
    }
}

/// Inclusive booking period used for availability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPeriod {
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl BookingPeriod {
    pub fn new(pickup_date: NaiveDate, return_date: NaiveDate) -> Result<Self, DomainError> {
        if return_date < pickup_date {
            return Err(DomainError::validation(
                "Return date must not be before pickup date",
            ));
        }

        Ok(Self {
            pickup_date,
            return_date,
        })
    }

    /// Two inclusive periods overlap when each starts on or before the other ends.
    pub fn overlaps(&self, other: &BookingPeriod) -> bool {
        self.pickup_date <= other.return_date && other.pickup_date <= self.return_date
    }
}

/// Filters for fleet search.
#[derive(Debug, Clone, Default)]
pub struct VehicleSearchParams {
    pub location_code: Option<String>,
    pub category: Option<VehicleCategory>,
    pub min_seats: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub status: Option<VehicleStatus>,
    pub period: Option<BookingPeriod>,
    pub page: u64,
    pub per_page: u64,
}

impl VehicleSearchParams {
    pub fn from_query(query: VehicleSearchQuery) -> Result<Self, DomainError> {
        let period = match (query.pickup_date, query.return_date) {
            (Some(pickup), Some(ret)) => Some(BookingPeriod::new(pickup, ret)?),
            (None, None) => None,
            _ => {
                return Err(DomainError::validation(
                    "pickup_date and return_date must be given together",
                ))
            }
        };

        let location_code = query
            .location_code
            .as_deref()
            .map(LocationCode::parse)
            .transpose()?
            .map(LocationCode::into_inner);

        Ok(Self {
            location_code,
            category: query.category,
            min_seats: query.min_seats,
            fuel_type: query.fuel_type,
            transmission: query.transmission,
            status: query.status,
            period,
            page: query.page,
            per_page: clamp_per_page(query.per_page),
        })
    }
}

impl Page<Vehicle> {
    pub fn into_dto(self) -> PaginatedVehiclesDto {
        PaginatedVehiclesDto {
            vehicles: self.items.into_iter().map(Vehicle::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
