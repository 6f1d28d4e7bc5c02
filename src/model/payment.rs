use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::string_enum;

string_enum! {
    pub enum PaymentMethod { CreditCard, DebitCard, PayPal, BankTransfer }
}

string_enum! {
    pub enum PaymentStatus { Captured, Refunded, Failed }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    /// Gross amount in EUR.
    pub amount: Decimal,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_reference: String,
    pub created_at: DateTime<Utc>,
    pub refunded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ProcessPaymentDto {
    pub method: PaymentMethod,
}
