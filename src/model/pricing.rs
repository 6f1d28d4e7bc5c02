use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::MoneyDto, vehicle::VehicleCategory};

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PricingPolicyDto {
    pub id: i32,
    pub category: VehicleCategory,
    /// `None` when the policy applies to every location.
    pub location_code: Option<String>,
    pub daily_rate: MoneyDto,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreatePricingPolicyDto {
    pub category: VehicleCategory,
    pub location_code: Option<String>,
    pub daily_rate_net: Decimal,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct PricingPolicyQuery {
    pub category: Option<VehicleCategory>,
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CalculatePriceDto {
    pub category: VehicleCategory,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub location_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PriceQuoteDto {
    pub category: VehicleCategory,
    pub rental_days: i64,
    pub daily_rate: MoneyDto,
    pub total: MoneyDto,
    pub vat_rate: Decimal,
}
