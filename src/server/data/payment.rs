use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::payment::{PaymentMethod, PaymentStatus},
    server::model::payment::Payment,
};

pub struct PaymentRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation being paid
    /// - `amount_cents`: Gross amount in cents
    /// - `method`: Payment method
    /// - `status`: Outcome reported by the provider
    /// - `transaction_reference`: Provider transaction reference
    pub async fn create(
        &self,
        reservation_id: i32,
        amount_cents: i64,
        method: PaymentMethod,
        status: PaymentStatus,
        transaction_reference: String,
    ) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            amount_cents: ActiveValue::Set(amount_cents),
            method: ActiveValue::Set(method.to_string()),
            status: ActiveValue::Set(status.to_string()),
            transaction_reference: ActiveValue::Set(transaction_reference),
            created_at: ActiveValue::Set(Utc::now()),
            refunded_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Payment::from_entity(payment)
    }

    /// Gets a payment by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Payment::from_entity)
            .transpose()
    }

    /// Gets all payments of a reservation, oldest first
    pub async fn get_by_reservation(&self, reservation_id: i32) -> Result<Vec<Payment>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect()
    }

    /// Checks whether a reservation already has a captured payment
    pub async fn has_captured(&self, reservation_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::ReservationId.eq(reservation_id))
            .filter(entity::payment::Column::Status.eq(PaymentStatus::Captured.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a transaction reference is already taken
    pub async fn transaction_reference_exists(&self, reference: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TransactionReference.eq(reference))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Persists the status and refund time of a payment
    pub async fn update_state(&self, payment: &Payment) -> Result<Payment, DbErr> {
        let mut active_model = entity::prelude::Payment::find_by_id(payment.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Payment with id {} not found",
                payment.id
            )))?
            .into_active_model();

        active_model.status = ActiveValue::Set(payment.status.to_string());
        active_model.refunded_at = ActiveValue::Set(payment.refunded_at);

        Payment::from_entity(active_model.update(self.db).await?)
    }
}
