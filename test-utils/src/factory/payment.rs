//! Payment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments. Defaults to a captured credit card payment of
/// 17850 gross cents.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    amount_cents: i64,
    method: String,
    status: String,
    transaction_reference: String,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            amount_cents: 17850,
            method: "CreditCard".to_string(),
            status: "Captured".to_string(),
            transaction_reference: format!("TX-TEST{:012}", next_id()),
        }
    }

    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let refunded_at = (self.status == "Refunded").then(Utc::now);

        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            method: ActiveValue::Set(self.method),
            status: ActiveValue::Set(self.status),
            transaction_reference: ActiveValue::Set(self.transaction_reference),
            created_at: ActiveValue::Set(Utc::now()),
            refunded_at: ActiveValue::Set(refunded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a captured payment for a reservation.
pub async fn create_payment(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, reservation_id).build().await
}
