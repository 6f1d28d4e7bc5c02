use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::location::LocationStatus,
    server::{
        data::{location::LocationRepository, vehicle::VehicleRepository},
        error::{domain::DomainError, AppError},
        model::{
            location::{CreateLocationParams, Location, UpdateLocationParams},
            Page,
        },
    },
};

pub struct LocationService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a new branch
    ///
    /// # Returns
    /// - `Ok(Location)`: The created location, active
    /// - `Err(AppError::DomainErr)`: A location with the same code already exists
    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, AppError> {
        let repo = LocationRepository::new(self.db);

        if repo.get_by_code(params.code.as_str()).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Location {} already exists",
                params.code.as_str()
            ))
            .into());
        }

        let location = repo.create(params).await?;

        tracing::info!("Created location {} ({})", location.code, location.name);

        Ok(location)
    }

    /// Gets a location by code, 404 when unknown
    pub async fn get(&self, code: &str) -> Result<Location, AppError> {
        LocationRepository::new(self.db)
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", code)))
    }

    /// Gets a location that accepts pick-ups and returns
    ///
    /// # Returns
    /// - `Ok(Location)`: The active location
    /// - `Err(AppError::NotFound)`: Unknown code
    /// - `Err(AppError::DomainErr)`: The location is inactive
    pub async fn get_active(&self, code: &str) -> Result<Location, AppError> {
        let location = self.get(code).await?;

        if !location.is_active() {
            return Err(DomainError::conflict(format!("Location {} is inactive", code)).into());
        }

        Ok(location)
    }

    pub async fn list(
        &self,
        active_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Location>, AppError> {
        Ok(LocationRepository::new(self.db)
            .get_paginated(active_only, page, per_page)
            .await?)
    }

    /// Replaces name, address, contact details and opening hours
    pub async fn update(&self, params: UpdateLocationParams) -> Result<Location, AppError> {
        let code = params.code.into_inner();

        self.get(&code).await?;

        Ok(LocationRepository::new(self.db)
            .update(&code, params.details)
            .await?)
    }

    /// Activates or deactivates a location
    ///
    /// A location cannot be deactivated while any of its vehicles is out on rent.
    pub async fn set_status(
        &self,
        code: &str,
        status: LocationStatus,
    ) -> Result<Location, AppError> {
        let location = self.get(code).await?;

        if location.status == status {
            return Ok(location);
        }

        if status == LocationStatus::Inactive {
            let rented = VehicleRepository::new(self.db)
                .count_rented_at_location(code)
                .await?;

            if rented > 0 {
                return Err(DomainError::conflict(format!(
                    "Location {} still has {} rented vehicle(s)",
                    code, rented
                ))
                .into());
            }
        }

        let location = LocationRepository::new(self.db)
            .set_status(code, status)
            .await?;

        tracing::info!("Location {} is now {}", location.code, location.status);

        Ok(location)
    }
}
