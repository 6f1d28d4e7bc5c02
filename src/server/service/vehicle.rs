use sea_orm::DatabaseConnection;

use crate::{
    model::{location::LocationStatus, vehicle::VehicleStatus},
    server::{
        data::{
            location::LocationRepository, reservation::ReservationRepository,
            vehicle::VehicleRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            money::Money,
            vehicle::{AddVehicleParams, Vehicle, VehicleSearchParams},
            Page,
        },
        service::location::LocationService,
    },
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a vehicle to the fleet at an active location
    ///
    /// # Returns
    /// - `Ok(Vehicle)`: The new vehicle, `Available`
    /// - `Err(AppError::DomainErr)`: Unknown or inactive location (400), or plate already registered (409)
    pub async fn add(&self, params: AddVehicleParams) -> Result<Vehicle, AppError> {
        let location = LocationRepository::new(self.db)
            .get_by_code(params.location_code.as_str())
            .await?
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Location {} does not exist",
                    params.location_code.as_str()
                ))
            })?;

        if location.status != LocationStatus::Active {
            return Err(DomainError::validation(format!(
                "Location {} is inactive",
                location.code
            ))
            .into());
        }

        let repo = VehicleRepository::new(self.db);

        if repo
            .license_plate_exists(params.license_plate.as_str())
            .await?
        {
            return Err(DomainError::conflict(format!(
                "A vehicle with license plate {} already exists",
                params.license_plate.as_str()
            ))
            .into());
        }

        let vehicle = repo.create(params).await?;

        tracing::info!(
            "Added vehicle {} ({}) at {}",
            vehicle.id,
            vehicle.license_plate,
            vehicle.location_code
        );

        Ok(vehicle)
    }

    pub async fn get(&self, id: i32) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Searches the fleet
    ///
    /// With a booking period only `Available` vehicles without an overlapping open
    /// reservation are returned.
    pub async fn search(&self, mut params: VehicleSearchParams) -> Result<Page<Vehicle>, AppError> {
        let excluded = match params.period {
            Some(period) => {
                params.status = Some(VehicleStatus::Available);
                ReservationRepository::new(self.db)
                    .booked_vehicle_ids(period)
                    .await?
            }
            None => Vec::new(),
        };

        Ok(VehicleRepository::new(self.db)
            .search(&params, &excluded)
            .await?)
    }

    pub async fn update_daily_rate(&self, id: i32, daily_rate: Money) -> Result<Vehicle, AppError> {
        self.get(id).await?;

        Ok(VehicleRepository::new(self.db)
            .update_daily_rate(id, daily_rate)
            .await?)
    }

    /// Changes the operational status of a vehicle
    ///
    /// `Rented` is owned by the pickup and return flow: it cannot be set here, and a
    /// rented vehicle can only be released back to `Available`.
    pub async fn set_status(&self, id: i32, status: VehicleStatus) -> Result<Vehicle, AppError> {
        let vehicle = self.get(id).await?;

        if status == VehicleStatus::Rented && !vehicle.is_rented() {
            return Err(DomainError::conflict(
                "Vehicles are marked as rented by picking up a reservation",
            )
            .into());
        }

        if vehicle.is_rented() && !matches!(status, VehicleStatus::Rented | VehicleStatus::Available) {
            return Err(DomainError::conflict(format!(
                "Vehicle {} is rented and can only become Available",
                id
            ))
            .into());
        }

        if vehicle.status == status {
            return Ok(vehicle);
        }

        let vehicle = VehicleRepository::new(self.db).set_status(id, status).await?;

        tracing::info!("Vehicle {} is now {}", vehicle.id, vehicle.status);

        Ok(vehicle)
    }

    /// Transfers a vehicle to another active location
    pub async fn move_to(&self, id: i32, location_code: &str) -> Result<Vehicle, AppError> {
        let vehicle = self.get(id).await?;

        if vehicle.is_rented() {
            return Err(
                DomainError::conflict(format!("Vehicle {} is rented and cannot be moved", id))
                    .into(),
            );
        }

        let location = LocationService::new(self.db).get_active(location_code).await?;

        let vehicle = VehicleRepository::new(self.db)
            .set_location(id, &location.code)
            .await?;

        tracing::info!("Moved vehicle {} to {}", vehicle.id, vehicle.location_code);

        Ok(vehicle)
    }

    /// Removes a vehicle that is neither rented nor referenced by an open reservation
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let vehicle = self.get(id).await?;

        if vehicle.is_rented() {
            return Err(
                DomainError::conflict(format!("Vehicle {} is rented and cannot be removed", id))
                    .into(),
            );
        }

        let open = ReservationRepository::new(self.db)
            .count_open_for_vehicle(id)
            .await?;

        if open > 0 {
            return Err(DomainError::conflict(format!(
                "Vehicle {} has {} open reservation(s)",
                id, open
            ))
            .into());
        }

        VehicleRepository::new(self.db).delete(id).await?;

        tracing::info!("Removed vehicle {} ({})", id, vehicle.license_plate);

        Ok(())
    }
}
