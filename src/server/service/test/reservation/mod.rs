use super::*;
use crate::{
    model::reservation::{CreateReservationDto, ReservationStatus},
    server::{
        model::reservation::CreateReservationParams, service::reservation::ReservationService,
    },
};
use test_utils::factory;

mod create;
mod no_show;
mod transitions;

fn create_params(
    vehicle_id: i32,
    customer_id: i32,
    location_code: &str,
    from_days: i64,
    to_days: i64,
) -> CreateReservationParams {
    CreateReservationParams::from_dto(
        CreateReservationDto {
            vehicle_id,
            customer_id,
            pickup_date: days_from_today(from_days),
            return_date: days_from_today(to_days),
            pickup_location_code: location_code.to_string(),
            dropoff_location_code: None,
        },
        today(),
    )
    .unwrap()
}
