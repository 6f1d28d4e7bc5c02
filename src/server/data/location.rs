use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::location::LocationStatus,
    server::model::{
        location::{CreateLocationParams, Location, LocationDetails},
        Page,
    },
};

pub struct LocationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active location
    ///
    /// # Returns
    /// - `Ok(Location)`: The created location
    /// - `Err(DbErr)`: Database error, including a duplicate code
    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, DbErr> {
        let now = Utc::now();
        let details = params.details;

        let location = entity::location::ActiveModel {
            code: ActiveValue::Set(params.code.into_inner()),
            name: ActiveValue::Set(details.name),
            street: ActiveValue::Set(details.street),
            postal_code: ActiveValue::Set(details.postal_code.into_inner()),
            city: ActiveValue::Set(details.city),
            phone: ActiveValue::Set(details.phone.into_inner()),
            email: ActiveValue::Set(details.email.into_inner()),
            opening_hours: ActiveValue::Set(details.opening_hours),
            status: ActiveValue::Set(LocationStatus::Active.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Location::from_entity(location)
    }

    /// Gets a location by its code
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Location>, DbErr> {
        entity::prelude::Location::find_by_id(code.to_string())
            .one(self.db)
            .await?
            .map(Location::from_entity)
            .transpose()
    }

    /// Gets locations ordered by name
    ///
    /// # Arguments
    /// - `active_only`: Skip inactive locations
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    pub async fn get_paginated(
        &self,
        active_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Location>, DbErr> {
        let mut query = entity::prelude::Location::find();
        if active_only {
            query = query
                .filter(entity::location::Column::Status.eq(LocationStatus::Active.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::location::Column::Name)
            .order_by_asc(entity::location::Column::Code)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let locations = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Location::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(locations, total, page, per_page))
    }

    /// Replaces name, address and contact details of a location
    pub async fn update(&self, code: &str, details: LocationDetails) -> Result<Location, DbErr> {
        let mut active_model = self.find_model(code).await?.into_active_model();

        active_model.name = ActiveValue::Set(details.name);
        active_model.street = ActiveValue::Set(details.street);
        active_model.postal_code = ActiveValue::Set(details.postal_code.into_inner());
        active_model.city = ActiveValue::Set(details.city);
        active_model.phone = ActiveValue::Set(details.phone.into_inner());
        active_model.email = ActiveValue::Set(details.email.into_inner());
        active_model.opening_hours = ActiveValue::Set(details.opening_hours);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Location::from_entity(active_model.update(self.db).await?)
    }

    /// Sets the status of a location
    pub async fn set_status(&self, code: &str, status: LocationStatus) -> Result<Location, DbErr> {
        let mut active_model = self.find_model(code).await?.into_active_model();

        active_model.status = ActiveValue::Set(status.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Location::from_entity(active_model.update(self.db).await?)
    }

    async fn find_model(&self, code: &str) -> Result<entity::location::Model, DbErr> {
        entity::prelude::Location::find_by_id(code.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Location with code {} not found",
                code
            )))
    }
}
