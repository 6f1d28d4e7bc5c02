use crate::{
    model::notification::{NotificationChannel, NotificationStatus},
    server::{
        data::notification::NotificationRepository,
        model::notification::{NotificationSearchParams, OutgoingMessage},
    },
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod mark_delivery;
