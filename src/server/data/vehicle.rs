use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::net_cents;
use crate::{
    model::vehicle::VehicleStatus,
    server::model::{
        money::Money,
        vehicle::{AddVehicleParams, Vehicle, VehicleSearchParams},
        Page,
    },
};

pub struct VehicleRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a vehicle to the fleet with status `Available`
    ///
    /// # Returns
    /// - `Ok(Vehicle)`: The created vehicle
    /// - `Err(DbErr)`: Database error, including a duplicate license plate
    pub async fn create(&self, params: AddVehicleParams) -> Result<Vehicle, DbErr> {
        let now = Utc::now();

        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category.to_string()),
            license_plate: ActiveValue::Set(params.license_plate.into_inner()),
            location_code: ActiveValue::Set(params.location_code.into_inner()),
            seats: ActiveValue::Set(params.seats),
            fuel_type: ActiveValue::Set(params.fuel_type.to_string()),
            transmission: ActiveValue::Set(params.transmission.to_string()),
            daily_rate_net_cents: ActiveValue::Set(net_cents(&params.daily_rate)?),
            status: ActiveValue::Set(VehicleStatus::Available.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Vehicle::from_entity(vehicle)
    }

    /// Gets a vehicle by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .map(Vehicle::from_entity)
            .transpose()
    }

    /// Loads a vehicle and locks its row until the surrounding transaction ends
    ///
    /// Serializes concurrent bookings of the same vehicle. SQLite has no row locks and
    /// serializes writers on the whole database instead.
    pub async fn get_for_update(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?
            .map(Vehicle::from_entity)
            .transpose()
    }

    /// Checks whether a license plate is already registered
    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::LicensePlate.eq(license_plate))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches the fleet, cheapest first
    ///
    /// # Arguments
    /// - `params`: Attribute filters and pagination
    /// - `excluded_ids`: Vehicles to leave out, typically those booked in the requested period
    ///
    /// # Returns
    /// - `Ok(Page<Vehicle>)`: Matching vehicles ordered by daily rate, then name
    /// - `Err(DbErr)`: Database error
    pub async fn search(
        &self,
        params: &VehicleSearchParams,
        excluded_ids: &[i32],
    ) -> Result<Page<Vehicle>, DbErr> {
        use entity::vehicle::Column;

        let mut query = entity::prelude::Vehicle::find();

        if let Some(location_code) = &params.location_code {
            query = query.filter(Column::LocationCode.eq(location_code.as_str()));
        }
        if let Some(category) = params.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }
        if let Some(min_seats) = params.min_seats {
            query = query.filter(Column::Seats.gte(min_seats));
        }
        if let Some(fuel_type) = params.fuel_type {
            query = query.filter(Column::FuelType.eq(fuel_type.as_str()));
        }
        if let Some(transmission) = params.transmission {
            query = query.filter(Column::Transmission.eq(transmission.as_str()));
        }
        if let Some(status) = params.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if !excluded_ids.is_empty() {
            query = query.filter(Column::Id.is_not_in(excluded_ids.iter().copied()));
        }

        let paginator = query
            .order_by_asc(Column::DailyRateNetCents)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let vehicles = paginator
            .fetch_page(params.page)
            .await?
            .into_iter()
            .map(Vehicle::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(vehicles, total, params.page, params.per_page))
    }

    /// Counts vehicles at a location that are currently rented out
    pub async fn count_rented_at_location(&self, location_code: &str) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::LocationCode.eq(location_code))
            .filter(entity::vehicle::Column::Status.eq(VehicleStatus::Rented.as_str()))
            .count(self.db)
            .await
    }

    /// Updates the net daily rate of a vehicle
    pub async fn update_daily_rate(&self, id: i32, daily_rate: Money) -> Result<Vehicle, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.daily_rate_net_cents = ActiveValue::Set(net_cents(&daily_rate)?);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Vehicle::from_entity(active_model.update(self.db).await?)
    }

    /// Sets the operational status of a vehicle
    pub async fn set_status(&self, id: i32, status: VehicleStatus) -> Result<Vehicle, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.status = ActiveValue::Set(status.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Vehicle::from_entity(active_model.update(self.db).await?)
    }

    /// Moves a vehicle to another location
    pub async fn set_location(&self, id: i32, location_code: &str) -> Result<Vehicle, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.location_code = ActiveValue::Set(location_code.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Vehicle::from_entity(active_model.update(self.db).await?)
    }

    /// Sets status and location in one update, used when a rental ends
    pub async fn check_in(
        &self,
        id: i32,
        location_code: &str,
        status: VehicleStatus,
    ) -> Result<Vehicle, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.location_code = ActiveValue::Set(location_code.to_string());
        active_model.status = ActiveValue::Set(status.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Vehicle::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a vehicle
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_model(&self, id: i32) -> Result<entity::vehicle::Model, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Vehicle with id {} not found",
                id
            )))
    }
}
