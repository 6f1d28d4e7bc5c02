use crate::{
    model::customer::{
        AddressDto, CustomerStatus, DriversLicenseDto, RegisterCustomerDto,
        UpdateCustomerProfileDto,
    },
    server::{
        data::customer::CustomerRepository,
        model::customer::{
            CustomerSearchParams, DriversLicense, RegisterCustomerParams,
            UpdateCustomerProfileParams,
        },
    },
};
use chrono::{Months, Utc};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod email_taken;
mod update;

fn address() -> AddressDto {
    AddressDto {
        street: "Hauptstraße 1".to_string(),
        postal_code: "10115".to_string(),
        city: "Berlin".to_string(),
        country: "DE".to_string(),
    }
}
