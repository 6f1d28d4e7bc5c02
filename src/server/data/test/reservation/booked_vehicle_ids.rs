use super::*;

/// Tests that overlapping open reservations block their vehicle.
///
/// Periods are inclusive: a reservation ending on the requested pickup day overlaps.
///
/// Expected: Ok with IDs of vehicles with overlapping open reservations only
#[tokio::test]
async fn returns_vehicles_with_overlapping_open_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let touching = factory::create_vehicle(db, &location.code).await?;
    let inside = factory::create_vehicle(db, &location.code).await?;
    let cancelled = factory::create_vehicle(db, &location.code).await?;
    let later = factory::create_vehicle(db, &location.code).await?;

    let reserve = |vehicle_id: i32| {
        factory::reservation::ReservationFactory::new(db, vehicle_id, customer.id, &location.code)
    };

    // Requested period: day 10 to day 15.
    reserve(touching.id)
        .period(today() + Days::new(5), today() + Days::new(10))
        .status("Confirmed")
        .build()
        .await?;
    reserve(inside.id)
        .period(today() + Days::new(11), today() + Days::new(12))
        .build()
        .await?;
    reserve(cancelled.id)
        .period(today() + Days::new(10), today() + Days::new(15))
        .status("Cancelled")
        .build()
        .await?;
    reserve(later.id)
        .period(today() + Days::new(16), today() + Days::new(20))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let ids = repo.booked_vehicle_ids(period(10, 15)).await?;

    let mut expected = vec![touching.id, inside.id];
    expected.sort();
    assert_eq!(ids, expected);

    assert!(repo.has_overlap(touching.id, period(10, 15)).await?);
    assert!(!repo.has_overlap(later.id, period(10, 15)).await?);

    Ok(())
}

/// Tests that a vehicle booked twice is listed once.
///
/// Expected: Ok with a single ID
#[tokio::test]
async fn returns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, vehicle, customer, _) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
        .period(today() + Days::new(8), today() + Days::new(9))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let ids = repo.booked_vehicle_ids(period(0, 30)).await?;

    assert_eq!(ids, vec![vehicle.id]);
    assert_eq!(repo.count_open_for_vehicle(vehicle.id).await?, 2);

    Ok(())
}
