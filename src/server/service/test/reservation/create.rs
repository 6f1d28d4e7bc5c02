use super::*;
use crate::model::vehicle::VehicleStatus;
use rust_decimal::Decimal;

/// Tests booking a vehicle covered by a pricing policy.
///
/// Expected: Pending reservation priced from the policy with an OCR reference
#[tokio::test]
async fn books_vehicle_with_policy_price() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .daily_rate_net_cents(4000)
        .build()
        .await?;

    let reservation = ReservationService::new(db, &dispatcher)
        .create(create_params(vehicle.id, customer.id, &location.code, 2, 5))
        .await?;

    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert!(reservation.reference.starts_with("OCR-"));
    assert_eq!(reservation.reference.len(), 12);
    assert_eq!(reservation.dropoff_location_code, location.code);
    assert_eq!(reservation.total_price.net(), Decimal::new(12000, 2));

    Ok(())
}

/// Tests booking without any pricing policy.
///
/// Expected: The vehicle's own daily rate is used
#[tokio::test]
async fn falls_back_to_vehicle_rate() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;

    let reservation = ReservationService::new(db, &dispatcher)
        .create(create_params(vehicle.id, customer.id, &location.code, 0, 2))
        .await?;

    // 2 x 50.00 net
    assert_eq!(reservation.total_price.net(), Decimal::new(10000, 2));
    assert_eq!(reservation.total_price.gross(), Decimal::new(11900, 2));

    Ok(())
}

/// Tests booking a vehicle for a period overlapping an open reservation.
///
/// Expected: Conflict, while an adjacent period after the return day is accepted
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    // existing booking: today+7 .. today+10
    let (location, vehicle, customer, _) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let service = ReservationService::new(db, &dispatcher);

    let overlapping = service
        .create(create_params(vehicle.id, customer.id, &location.code, 10, 12))
        .await;
    assert!(is_conflict(&overlapping));

    service
        .create(create_params(vehicle.id, customer.id, &location.code, 11, 12))
        .await?;

    Ok(())
}

/// Tests that cancelled reservations do not block the vehicle.
///
/// Expected: Ok
#[tokio::test]
async fn ignores_cancelled_reservations_for_overlap() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
        .status("Cancelled")
        .build()
        .await?;

    ReservationService::new(db, &dispatcher)
        .create(create_params(vehicle.id, customer.id, &location.code, 7, 10))
        .await?;

    Ok(())
}

/// Tests the customer checks.
///
/// Expected: Suspended customers conflict, licenses expiring before return are invalid
#[tokio::test]
async fn checks_customer_eligibility() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let suspended = factory::customer::CustomerFactory::new(db)
        .status("Suspended")
        .build()
        .await?;
    let expiring = factory::customer::CustomerFactory::new(db)
        .license_expiry_date(days_from_today(3))
        .build()
        .await?;
    let service = ReservationService::new(db, &dispatcher);

    let result = service
        .create(create_params(vehicle.id, suspended.id, &location.code, 1, 2))
        .await;
    assert!(is_conflict(&result));

    let result = service
        .create(create_params(vehicle.id, expiring.id, &location.code, 1, 5))
        .await;
    assert!(is_validation(&result));

    Ok(())
}

/// Tests the vehicle and location checks.
///
/// Expected: Unavailable vehicle conflicts, wrong pickup branch is invalid, inactive
/// drop-off conflicts
#[tokio::test]
async fn checks_vehicle_and_locations() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let other = factory::create_location(db).await?;
    let closed = factory::location::LocationFactory::new(db)
        .status("Inactive")
        .build()
        .await?;
    let in_service = factory::vehicle::VehicleFactory::new(db, &location.code)
        .status(VehicleStatus::Maintenance.as_str())
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;
    let service = ReservationService::new(db, &dispatcher);

    let result = service
        .create(create_params(in_service.id, customer.id, &location.code, 1, 2))
        .await;
    assert!(is_conflict(&result));

    let result = service
        .create(create_params(vehicle.id, customer.id, &other.code, 1, 2))
        .await;
    assert!(is_validation(&result));

    let mut params = create_params(vehicle.id, customer.id, &location.code, 1, 2);
    params.dropoff_location_code =
        crate::server::model::value::LocationCode::parse(&closed.code)?;
    assert!(is_conflict(&service.create(params).await));

    let result = service
        .create(create_params(vehicle.id + 100, customer.id, &location.code, 1, 2))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous bookings of the same vehicle and period.
///
/// Expected: Exactly one succeeds, the other conflicts
#[tokio::test]
async fn concurrent_bookings_book_vehicle_once() -> Result<(), AppError> {
    let test = rental_db().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dispatcher = dispatcher();
    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let first_customer = factory::create_customer(db).await?;
    let second_customer = factory::create_customer(db).await?;
    let service = ReservationService::new(db, &dispatcher);

    let (first, second) = tokio::join!(
        service.create(create_params(vehicle.id, first_customer.id, &location.code, 2, 5)),
        service.create(create_params(vehicle.id, second_customer.id, &location.code, 3, 6)),
    );

    assert_eq!(
        [first.is_ok(), second.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count(),
        1
    );
    assert!(is_conflict(&first) || is_conflict(&second));

    Ok(())
}
