use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// VAT-inclusive amount in EUR.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MoneyDto {
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
    pub currency: String,
}

pub fn default_per_page() -> u64 {
    10
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
    pub database: bool,
}
