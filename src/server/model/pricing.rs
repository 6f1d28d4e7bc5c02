//! Domain models for pricing policies and price quotes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;

use crate::{
    model::{
        pricing::{CalculatePriceDto, CreatePricingPolicyDto, PriceQuoteDto, PricingPolicyDto},
        vehicle::VehicleCategory,
    },
    server::{
        error::domain::DomainError,
        model::{
            money::{Money, VAT_RATE},
            parse_column,
            value::LocationCode,
            vehicle::positive_daily_rate,
        },
    },
};

/// Daily rate for a category, optionally restricted to one location and a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    pub id: i32,
    pub category: VehicleCategory,
    pub location_code: Option<String>,
    pub daily_rate: Money,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl PricingPolicy {
    pub fn from_entity(entity: entity::pricing_policy::Model) -> Result<Self, DbErr> {
        Ok(Self {
            category: parse_column("pricing_policy.category", &entity.category)?,
            daily_rate: Money::from_net_cents(entity.daily_rate_net_cents).map_err(|e| {
                DbErr::Custom(format!("Invalid pricing_policy.daily_rate: {}", e))
            })?,
            id: entity.id,
            location_code: entity.location_code,
            effective_from: entity.effective_from,
            effective_until: entity.effective_until,
            active: entity.active,
            created_at: entity.created_at,
        })
    }

    /// Whether the policy is active and its inclusive date range contains `date`.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.active
            && self.effective_from <= date
            && self.effective_until.is_none_or(|until| date <= until)
    }

    pub fn into_dto(self) -> PricingPolicyDto {
        PricingPolicyDto {
            id: self.id,
            category: self.category,
            location_code: self.location_code,
            daily_rate: self.daily_rate.into_dto(),
            effective_from: self.effective_from,
            effective_until: self.effective_until,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Picks the policy that governs a booking among candidates for one category.
///
/// A location-specific policy beats a general one; within the same specificity the
/// most recent `effective_from` wins.
pub fn select_effective_policy(
    candidates: Vec<PricingPolicy>,
    location_code: Option<&str>,
    date: NaiveDate,
) -> Option<PricingPolicy> {
    candidates
        .into_iter()
        .filter(|p| p.applies_on(date))
        .filter(|p| match (&p.location_code, location_code) {
            (None, _) => true,
            (Some(policy_location), Some(location)) => policy_location == location,
            (Some(_), None) => false,
        })
        .max_by_key(|p| (p.location_code.is_some(), p.effective_from, p.id))
}

#[derive(Debug, Clone)]
pub struct CreatePricingPolicyParams {
    pub category: VehicleCategory,
    pub location_code: Option<LocationCode>,
    pub daily_rate: Money,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
}

impl CreatePricingPolicyParams {
    pub fn from_dto(dto: CreatePricingPolicyDto) -> Result<Self, DomainError> {
        if let Some(until) = dto.effective_until {
            if until < dto.effective_from {
                return Err(DomainError::validation(
                    "effective_until must not be before effective_from",
                ));
            }
        }

        Ok(Self {
            category: dto.category,
            location_code: dto
                .location_code
                .as_deref()
                .map(LocationCode::parse)
                .transpose()?,
            daily_rate: positive_daily_rate(dto.daily_rate_net)?,
            effective_from: dto.effective_from,
            effective_until: dto.effective_until,
        })
    }
}

/// Number of billable days between two dates, at least one.
pub fn rental_days(pickup_date: NaiveDate, return_date: NaiveDate) -> Result<i64, DomainError> {
    if return_date < pickup_date {
        return Err(DomainError::validation(
            "Return date must not be before pickup date",
        ));
    }

    Ok((return_date - pickup_date).num_days().max(1))
}

#[derive(Debug, Clone)]
pub struct CalculatePriceParams {
    pub category: VehicleCategory,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub location_code: Option<LocationCode>,
}

impl CalculatePriceParams {
    pub fn from_dto(dto: CalculatePriceDto) -> Result<Self, DomainError> {
        rental_days(dto.pickup_date, dto.return_date)?;

        Ok(Self {
            category: dto.category,
            pickup_date: dto.pickup_date,
            return_date: dto.return_date,
            location_code: dto
                .location_code
                .as_deref()
                .map(LocationCode::parse)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub category: VehicleCategory,
    pub rental_days: i64,
    pub daily_rate: Money,
    pub total: Money,
}

impl PriceQuote {
    pub fn new(
        category: VehicleCategory,
        daily_rate: Money,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let days = rental_days(pickup_date, return_date)?;

        Ok(Self {
            category,
            rental_days: days,
            daily_rate,
            total: daily_rate.times(days)?,
        })
    }

    pub fn vat_rate(&self) -> Decimal {
        VAT_RATE
    }

    pub fn into_dto(self) -> PriceQuoteDto {
        PriceQuoteDto {
            category: self.category,
            rental_days: self.rental_days,
            vat_rate: self.vat_rate(),
            daily_rate: self.daily_rate.into_dto(),
            total: self.total.into_dto(),
        }
    }
}
