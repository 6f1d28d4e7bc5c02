use crate::{
    model::reservation::ReservationStatus,
    server::{
        data::reservation::ReservationRepository,
        model::{
            money::Money,
            reservation::{NewReservation, ReservationSearchParams},
            vehicle::BookingPeriod,
        },
    },
};
use chrono::{Days, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod booked_vehicle_ids;
mod create;
mod get_overdue_confirmed;
mod search;
mod update_state;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn period(from_days: u64, to_days: u64) -> BookingPeriod {
    BookingPeriod::new(today() + Days::new(from_days), today() + Days::new(to_days)).unwrap()
}
