use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{notification::dispatcher::NotificationDispatcher, reservation::ReservationService},
};

/// Top of every hour.
const NO_SHOW_SCHEDULE: &str = "0 0 * * * *";

/// Starts the no-show scheduler.
///
/// Every hour, confirmed reservations whose pickup date has passed without a pickup are
/// marked as `NoShow`. A failing run is logged and the next run proceeds normally.
///
/// # Arguments
/// - `db`: Database connection
/// - `dispatcher`: Notification dispatcher required by the reservation service
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)`: The scheduler could not be created or started
pub async fn start_scheduler(
    db: DatabaseConnection,
    dispatcher: NotificationDispatcher,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(NO_SHOW_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let dispatcher = dispatcher.clone();

        Box::pin(async move {
            if let Err(e) = sweep_no_shows(&db, &dispatcher).await {
                tracing::error!("Error marking overdue reservations as no-show: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("No-show scheduler started ({})", NO_SHOW_SCHEDULE);

    Ok(scheduler)
}

/// Runs a single no-show sweep for the current UTC date.
pub async fn sweep_no_shows(
    db: &DatabaseConnection,
    dispatcher: &NotificationDispatcher,
) -> Result<usize, AppError> {
    let today = Utc::now().date_naive();
    let marked = ReservationService::new(db, dispatcher)
        .mark_overdue_no_shows(today)
        .await?;

    tracing::info!("Marked {} reservation(s) as no-show", marked);

    Ok(marked)
}
