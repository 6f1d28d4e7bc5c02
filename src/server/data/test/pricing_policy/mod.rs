use crate::{
    model::{pricing::CreatePricingPolicyDto, vehicle::VehicleCategory},
    server::{
        data::pricing_policy::PricingPolicyRepository,
        model::pricing::CreatePricingPolicyParams,
    },
};
use chrono::{Days, Utc};
use entity::prelude::*;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
mod get_candidates;
mod list;
