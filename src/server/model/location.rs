//! Domain models for rental branches.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::location::{
        CreateLocationDto, LocationDto, LocationStatus, PaginatedLocationsDto, UpdateLocationDto,
    },
    server::{
        error::domain::DomainError,
        model::{
            parse_column, Page,
            value::{required_text, Email, LocationCode, PhoneNumber, PostalCode},
        },
    },
};

const MAX_NAME_LENGTH: usize = 100;
const MAX_STREET_LENGTH: usize = 200;
const MAX_OPENING_HOURS_LENGTH: usize = 200;

/// A rental branch where vehicles are parked, picked up and returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub code: String,
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: String,
    pub status: LocationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Converts an entity model to a location domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Location)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored status is not a known `LocationStatus`
    pub fn from_entity(entity: entity::location::Model) -> Result<Self, DbErr> {
        Ok(Self {
            status: parse_column("location.status", &entity.status)?,
            code: entity.code,
            name: entity.name,
            street: entity.street,
            postal_code: entity.postal_code,
            city: entity.city,
            phone: entity.phone,
            email: entity.email,
            opening_hours: entity.opening_hours,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == LocationStatus::Active
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            code: self.code,
            name: self.name,
            street: self.street,
            postal_code: self.postal_code,
            city: self.city,
            phone: self.phone,
            email: self.email,
            opening_hours: self.opening_hours,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated name, address and contact data shared by create and update.
#[derive(Debug, Clone)]
pub struct LocationDetails {
    pub name: String,
    pub street: String,
    pub postal_code: PostalCode,
    pub city: String,
    pub phone: PhoneNumber,
    pub email: Email,
    pub opening_hours: String,
}

impl LocationDetails {
    #[allow(clippy::too_many_arguments)]
    fn parse(
        name: &str,
        street: &str,
        postal_code: &str,
        city: &str,
        phone: &str,
        email: &str,
        opening_hours: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: required_text("Location name", name, MAX_NAME_LENGTH)?,
            street: required_text("Street", street, MAX_STREET_LENGTH)?,
            postal_code: PostalCode::parse(postal_code)?,
            city: required_text("City", city, MAX_NAME_LENGTH)?,
            phone: PhoneNumber::parse(phone)?,
            email: Email::parse(email)?,
            opening_hours: required_text(
                "Opening hours",
                opening_hours,
                MAX_OPENING_HOURS_LENGTH,
            )?,
        })
    }
}

/// Parameters for creating a new location.
#[derive(Debug, Clone)]
pub struct CreateLocationParams {
    pub code: LocationCode,
    pub details: LocationDetails,
}

impl CreateLocationParams {
    pub fn from_dto(dto: CreateLocationDto) -> Result<Self, DomainError> {
        Ok(Self {
            code: LocationCode::parse(&dto.code)?,
            details: LocationDetails::parse(
                &dto.name,
                &dto.street,
                &dto.postal_code,
                &dto.city,
                &dto.phone,
                &dto.email,
                &dto.opening_hours,
            )?,
        })
    }
}

/// Parameters for replacing the details of an existing location.
#[derive(Debug, Clone)]
pub struct UpdateLocationParams {
    pub code: LocationCode,
    pub details: LocationDetails,
}

impl UpdateLocationParams {
    pub fn from_dto(code: &str, dto: UpdateLocationDto) -> Result<Self, DomainError> {
        Ok(Self {
            code: LocationCode::parse(code)?,
            details: LocationDetails::parse(
                &dto.name,
                &dto.street,
                &dto.postal_code,
                &dto.city,
                &dto.phone,
                &dto.email,
                &dto.opening_hours,
            )?,
        })
    }
}

impl Page<Location> {
    pub fn into_dto(self) -> PaginatedLocationsDto {
        PaginatedLocationsDto {
            locations: self.items.into_iter().map(Location::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
