use crate::{
    model::vehicle::{AddVehicleDto, FuelType, Transmission, VehicleCategory, VehicleStatus},
    server::{
        data::vehicle::VehicleRepository,
        model::{
            money::Money,
            vehicle::{AddVehicleParams, VehicleSearchParams},
        },
    },
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_rented_at_location;
mod create;
mod delete;
mod get_for_update;
mod search;
mod update;

fn search_params() -> VehicleSearchParams {
    VehicleSearchParams {
        page: 0,
        per_page: 10,
        ..Default::default()
    }
}
