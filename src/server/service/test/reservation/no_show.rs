use super::*;

/// Tests marking a confirmed reservation whose pickup day has passed.
///
/// Expected: NoShow
#[tokio::test]
async fn marks_overdue_reservation_as_no_show() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(days_from_today(-2), days_from_today(1))
            .status("Confirmed")
            .build()
            .await?;

    let marked = ReservationService::new(db, &dispatcher)
        .mark_no_show(reservation.id)
        .await?;

    assert_eq!(marked.status, ReservationStatus::NoShow);

    Ok(())
}

/// Tests marking a reservation whose pickup day is today.
///
/// Expected: Conflict
#[tokio::test]
async fn cannot_mark_no_show_on_pickup_day() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(today(), days_from_today(1))
            .status("Confirmed")
            .build()
            .await?;

    let result = ReservationService::new(db, &dispatcher)
        .mark_no_show(reservation.id)
        .await;

    assert!(is_conflict(&result));

    Ok(())
}

/// Tests the hourly sweep.
///
/// Expected: Only confirmed reservations with a past pickup day are marked
#[tokio::test]
async fn sweep_marks_only_overdue_confirmed() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let book = |status: &'static str, from: i64, to: i64| {
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(days_from_today(from), days_from_today(to))
            .status(status)
            .build()
    };

    let overdue = book("Confirmed", -3, -1).await?;
    let pending = book("Pending", -3, -1).await?;
    let upcoming = book("Confirmed", 0, 2).await?;

    let service = ReservationService::new(db, &dispatcher);
    let marked = service.mark_overdue_no_shows(today()).await?;

    assert_eq!(marked, 1);
    assert_eq!(service.get(overdue.id).await?.status, ReservationStatus::NoShow);
    assert_eq!(service.get(pending.id).await?.status, ReservationStatus::Pending);
    assert_eq!(
        service.get(upcoming.id).await?.status,
        ReservationStatus::Confirmed
    );

    Ok(())
}

/// Tests that a scheduled run reports how many reservations it marked, including none.
///
/// Expected: 1 on the first run, 0 on the second
#[tokio::test]
async fn scheduled_sweep_reports_marked_count() -> Result<(), AppError> {
    use crate::server::scheduler::no_show::sweep_no_shows;

    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
        .period(days_from_today(-3), days_from_today(-1))
        .status("Confirmed")
        .build()
        .await?;

    assert_eq!(sweep_no_shows(db, &dispatcher).await?, 1);
    assert_eq!(sweep_no_shows(db, &dispatcher).await?, 0);

    Ok(())
}
