use crate::{
    model::location::{CreateLocationDto, LocationStatus, UpdateLocationDto},
    server::{
        data::location::LocationRepository,
        model::location::{CreateLocationParams, UpdateLocationParams},
    },
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod set_status;
mod update;

fn create_params(code: &str) -> CreateLocationParams {
    CreateLocationParams::from_dto(CreateLocationDto {
        code: code.to_string(),
        name: "Berlin Hauptbahnhof".to_string(),
        street: "Europaplatz 1".to_string(),
        postal_code: "10557".to_string(),
        city: "Berlin".to_string(),
        phone: "030 1234567".to_string(),
        email: "berlin@orange-rental.de".to_string(),
        opening_hours: "Mo-So 06:00-22:00".to_string(),
    })
    .unwrap()
}
