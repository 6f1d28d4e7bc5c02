use chrono::{Days, NaiveDate, Utc};
use test_utils::builder::TestBuilder;

use crate::server::{error::AppError, service::notification::dispatcher::NotificationDispatcher};

mod reservation;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn days_from_today(days: i64) -> NaiveDate {
    if days >= 0 {
        today() + Days::new(days as u64)
    } else {
        today() - Days::new(days.unsigned_abs())
    }
}

fn dispatcher() -> NotificationDispatcher {
    NotificationDispatcher::log_only()
}

fn is_conflict(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::DomainErr(
            crate::server::error::domain::DomainError::Conflict(_)
        ))
    )
}

fn is_validation(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::DomainErr(
            crate::server::error::domain::DomainError::Validation(_)
        ))
    )
}

fn rental_db() -> TestBuilder {
    TestBuilder::new().with_rental_tables()
}
