use super::*;
use crate::{
    model::{
        notification::NotificationStatus, payment::PaymentStatus, vehicle::VehicleStatus,
    },
    server::{
        data::{
            notification::NotificationRepository, payment::PaymentRepository,
            vehicle::VehicleRepository,
        },
        model::notification::NotificationSearchParams,
    },
};

async fn notifications_for(
    db: &sea_orm::DatabaseConnection,
    reservation_id: i32,
) -> Result<Vec<crate::server::model::notification::Notification>, AppError> {
    Ok(NotificationRepository::new(db)
        .get_paginated(&NotificationSearchParams {
            reservation_id: Some(reservation_id),
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?
        .items)
}

/// Tests confirming a pending reservation.
///
/// Expected: Confirmed with timestamp, one confirmation e-mail sent to the customer
#[tokio::test]
async fn confirm_sends_email() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (_, _, customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let confirmed = ReservationService::new(db, &dispatcher)
        .confirm(reservation.id)
        .await?;

    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    let sent = notifications_for(db, reservation.id).await?;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, customer.email);
    assert_eq!(sent[0].status, NotificationStatus::Sent);

    Ok(())
}

/// Tests confirming twice.
///
/// Expected: Conflict on the second attempt
#[tokio::test]
async fn confirm_twice_conflicts() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (_, _, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let service = ReservationService::new(db, &dispatcher);

    service.confirm(reservation.id).await?;

    assert!(is_conflict(&service.confirm(reservation.id).await));

    Ok(())
}

/// Tests cancelling a paid reservation.
///
/// Expected: Cancelled with reason, payment refunded, e-mail sent
#[tokio::test]
async fn cancel_refunds_payment() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (_, _, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let payment = factory::create_payment(db, reservation.id).await?;

    let cancelled = ReservationService::new(db, &dispatcher)
        .cancel(reservation.id, "Trip postponed".to_string())
        .await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(cancelled.cancellation_reason.as_deref(), Some("Trip postponed"));

    let payment = PaymentRepository::new(db)
        .get_by_id(payment.id)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Refunded);

    assert_eq!(notifications_for(db, reservation.id).await?.len(), 1);

    Ok(())
}

/// Tests cancelling an active rental.
///
/// Expected: Conflict
#[tokio::test]
async fn cannot_cancel_active_rental() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(today(), days_from_today(2))
            .status("Active")
            .build()
            .await?;

    let result = ReservationService::new(db, &dispatcher)
        .cancel(reservation.id, "Changed my mind".to_string())
        .await;

    assert!(is_conflict(&result));

    Ok(())
}

/// Tests the full rental from pickup to return at another branch.
///
/// Expected: Vehicle rented during the rental, then available at the drop-off branch
#[tokio::test]
async fn pickup_and_return_move_vehicle() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let dropoff = factory::create_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(today(), days_from_today(3))
            .dropoff_location_code(&dropoff.code)
            .status("Confirmed")
            .build()
            .await?;
    let service = ReservationService::new(db, &dispatcher);
    let vehicles = VehicleRepository::new(db);

    let active = service.pickup(reservation.id).await?;
    assert_eq!(active.status, ReservationStatus::Active);
    assert_eq!(
        vehicles.get_by_id(vehicle.id).await?.unwrap().status,
        VehicleStatus::Rented
    );

    let completed = service.return_vehicle(reservation.id).await?;
    assert_eq!(completed.status, ReservationStatus::Completed);

    let returned = vehicles.get_by_id(vehicle.id).await?.unwrap();
    assert_eq!(returned.status, VehicleStatus::Available);
    assert_eq!(returned.location_code, dropoff.code);

    Ok(())
}

/// Tests picking up before the pickup date.
///
/// Expected: Conflict, vehicle stays available
#[tokio::test]
async fn pickup_before_date_conflicts() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .status("Confirmed")
            .build()
            .await?;

    let result = ReservationService::new(db, &dispatcher)
        .pickup(reservation.id)
        .await;

    assert!(is_conflict(&result));
    assert_eq!(
        VehicleRepository::new(db)
            .get_by_id(vehicle.id)
            .await?
            .unwrap()
            .status,
        VehicleStatus::Available
    );

    Ok(())
}

/// Tests looking a reservation up by its reference.
///
/// Expected: Found regardless of casing, and listed in the customer's history
#[tokio::test]
async fn finds_by_reference_and_customer() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (_, _, customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let service = ReservationService::new(db, &dispatcher);

    let found = service
        .get_by_reference(&reservation.reference.to_lowercase())
        .await?;
    assert_eq!(found.id, reservation.id);

    let history = service.customer_reservations(customer.id).await?;
    assert_eq!(history.len(), 1);

    assert!(matches!(
        service.customer_reservations(customer.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a cancellation whose refund fails.
///
/// Expected: Error, reservation still pending and payment untouched so a retry can refund
#[tokio::test]
async fn cancel_rolls_back_when_refund_fails() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (_, _, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    // unreadable method makes loading the reservation's payments fail
    factory::payment::PaymentFactory::new(db, reservation.id)
        .method("Bitcoin")
        .build()
        .await?;
    let service = ReservationService::new(db, &dispatcher);

    let result = service
        .cancel(reservation.id, "Trip postponed".to_string())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let stored = service.get(reservation.id).await?;
    assert_eq!(stored.status, ReservationStatus::Pending);
    assert!(stored.cancellation_reason.is_none());
    assert!(notifications_for(db, reservation.id).await?.is_empty());

    Ok(())
}

/// Tests a pickup whose vehicle update fails.
///
/// Expected: Error, reservation still confirmed
#[tokio::test]
async fn pickup_rolls_back_when_vehicle_update_fails() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let location = factory::create_location(db).await?;
    // unreadable fuel type makes the vehicle update fail after the write
    let vehicle = factory::vehicle::VehicleFactory::new(db, &location.code)
        .fuel_type("Steam")
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
            .period(today(), days_from_today(2))
            .status("Confirmed")
            .build()
            .await?;
    let service = ReservationService::new(db, &dispatcher);

    let result = service.pickup(reservation.id).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let stored = service.get(reservation.id).await?;
    assert_eq!(stored.status, ReservationStatus::Confirmed);
    assert!(stored.picked_up_at.is_none());

    Ok(())
}
