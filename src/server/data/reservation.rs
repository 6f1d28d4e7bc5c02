use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::net_cents;
use crate::{
    model::reservation::ReservationStatus,
    server::model::{
        reservation::{NewReservation, Reservation, ReservationSearchParams, OPEN_STATUSES},
        vehicle::BookingPeriod,
        Page,
    },
};

pub struct ReservationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a priced reservation with status `Pending`
    pub async fn create(&self, reservation: NewReservation) -> Result<Reservation, DbErr> {
        let model = entity::reservation::ActiveModel {
            reference: ActiveValue::Set(reservation.reference),
            vehicle_id: ActiveValue::Set(reservation.vehicle_id),
            customer_id: ActiveValue::Set(reservation.customer_id),
            pickup_date: ActiveValue::Set(reservation.period.pickup_date),
            return_date: ActiveValue::Set(reservation.period.return_date),
            pickup_location_code: ActiveValue::Set(reservation.pickup_location_code),
            dropoff_location_code: ActiveValue::Set(reservation.dropoff_location_code),
            total_price_net_cents: ActiveValue::Set(net_cents(&reservation.total_price)?),
            status: ActiveValue::Set(ReservationStatus::Pending.to_string()),
            cancellation_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            confirmed_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            picked_up_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Reservation::from_entity(model)
    }

    /// Gets a reservation by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Gets a reservation by its booking reference
    pub async fn get_by_reference(&self, reference: &str) -> Result<Option<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Reference.eq(reference))
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Checks whether a booking reference is already taken
    pub async fn reference_exists(&self, reference: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Reference.eq(reference))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches reservations, latest pickup date first
    pub async fn search(
        &self,
        params: &ReservationSearchParams,
    ) -> Result<Page<Reservation>, DbErr> {
        use entity::reservation::Column;

        let mut query = entity::prelude::Reservation::find();

        if let Some(customer_id) = params.customer_id {
            query = query.filter(Column::CustomerId.eq(customer_id));
        }
        if let Some(vehicle_id) = params.vehicle_id {
            query = query.filter(Column::VehicleId.eq(vehicle_id));
        }
        if let Some(status) = params.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(from) = params.from {
            query = query.filter(Column::PickupDate.gte(from));
        }
        if let Some(to) = params.to {
            query = query.filter(Column::PickupDate.lte(to));
        }

        let paginator = query
            .order_by_desc(Column::PickupDate)
            .order_by_desc(Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let reservations = paginator
            .fetch_page(params.page)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(reservations, total, params.page, params.per_page))
    }

    /// Gets all reservations of a customer, latest pickup date first
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::reservation::Column::PickupDate)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets IDs of vehicles holding an open reservation that overlaps the period
    ///
    /// Periods are inclusive on both ends, so a booking ending on the day another
    /// starts counts as overlapping.
    pub async fn booked_vehicle_ids(&self, period: BookingPeriod) -> Result<Vec<i32>, DbErr> {
        use entity::reservation::Column;

        entity::prelude::Reservation::find()
            .select_only()
            .column(Column::VehicleId)
            .distinct()
            .filter(Column::Status.is_in(open_statuses()))
            .filter(Column::PickupDate.lte(period.return_date))
            .filter(Column::ReturnDate.gte(period.pickup_date))
            .order_by_asc(Column::VehicleId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Checks whether a vehicle has an open reservation overlapping the period
    pub async fn has_overlap(&self, vehicle_id: i32, period: BookingPeriod) -> Result<bool, DbErr> {
        use entity::reservation::Column;

        let count = entity::prelude::Reservation::find()
            .filter(Column::VehicleId.eq(vehicle_id))
            .filter(Column::Status.is_in(open_statuses()))
            .filter(Column::PickupDate.lte(period.return_date))
            .filter(Column::ReturnDate.gte(period.pickup_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts open reservations for a vehicle
    pub async fn count_open_for_vehicle(&self, vehicle_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VehicleId.eq(vehicle_id))
            .filter(entity::reservation::Column::Status.is_in(open_statuses()))
            .count(self.db)
            .await
    }

    /// Gets confirmed reservations whose pickup date lies before `today`
    pub async fn get_overdue_confirmed(&self, today: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(
                entity::reservation::Column::Status.eq(ReservationStatus::Confirmed.as_str()),
            )
            .filter(entity::reservation::Column::PickupDate.lt(today))
            .order_by_asc(entity::reservation::Column::PickupDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Persists the lifecycle fields of a reservation after a status transition
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The stored reservation
    /// - `Err(DbErr::RecordNotFound)`: No reservation with that ID
    pub async fn update_state(&self, reservation: &Reservation) -> Result<Reservation, DbErr> {
        let mut active_model = entity::prelude::Reservation::find_by_id(reservation.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation with id {} not found",
                reservation.id
            )))?
            .into_active_model();

        active_model.status = ActiveValue::Set(reservation.status.to_string());
        active_model.cancellation_reason = ActiveValue::Set(reservation.cancellation_reason.clone());
        active_model.confirmed_at = ActiveValue::Set(reservation.confirmed_at);
        active_model.cancelled_at = ActiveValue::Set(reservation.cancelled_at);
        active_model.picked_up_at = ActiveValue::Set(reservation.picked_up_at);
        active_model.completed_at = ActiveValue::Set(reservation.completed_at);

        Reservation::from_entity(active_model.update(self.db).await?)
    }
}

fn open_statuses() -> Vec<&'static str> {
    OPEN_STATUSES.iter().map(|s| s.as_str()).collect()
}
