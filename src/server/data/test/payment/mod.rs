use crate::{
    model::payment::{PaymentMethod, PaymentStatus},
    server::data::payment::PaymentRepository,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod has_captured;
mod update_state;
