//! Payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;

use crate::{
    model::payment::{PaymentDto, PaymentMethod, PaymentStatus},
    server::{
        error::domain::DomainError,
        model::{money::CURRENCY, parse_column},
    },
};

pub const TRANSACTION_PREFIX: &str = "TX";
pub const TRANSACTION_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub reservation_id: i32,
    /// Gross amount in cents.
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_reference: String,
    pub created_at: DateTime<Utc>,
    pub refunded_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            method: parse_column("payment.method", &entity.method)?,
            status: parse_column("payment.status", &entity.status)?,
            id: entity.id,
            reservation_id: entity.reservation_id,
            amount_cents: entity.amount_cents,
            transaction_reference: entity.transaction_reference,
            created_at: entity.created_at,
            refunded_at: entity.refunded_at,
        })
    }

    pub fn is_captured(&self) -> bool {
        self.status == PaymentStatus::Captured
    }

    /// Captured -> Refunded.
    pub fn refund(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.is_captured() {
            return Err(DomainError::conflict(format!(
                "Cannot refund a payment in status {}",
                self.status
            )));
        }
        self.status = PaymentStatus::Refunded;
        self.refunded_at = Some(now);
        Ok(())
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            reservation_id: self.reservation_id,
            amount: Decimal::new(self.amount_cents, 2),
            currency: CURRENCY.to_string(),
            method: self.method,
            status: self.status,
            transaction_reference: self.transaction_reference,
            created_at: self.created_at,
            refunded_at: self.refunded_at,
        }
    }
}
