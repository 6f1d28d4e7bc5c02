use super::*;

/// Tests updating the daily rate.
///
/// Expected: Ok with new net rate and derived gross
#[tokio::test]
async fn updates_daily_rate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;

    let repo = VehicleRepository::new(db);
    let rate = Money::from_net(Decimal::new(6000, 2)).unwrap();
    let updated = repo.update_daily_rate(vehicle.id, rate).await?;

    assert_eq!(updated.daily_rate.net(), Decimal::new(6000, 2));
    assert_eq!(updated.daily_rate.gross(), Decimal::new(7140, 2));

    Ok(())
}

/// Tests setting status and moving a vehicle.
///
/// Expected: Ok with status and location updated
#[tokio::test]
async fn updates_status_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let target = factory::create_location(db).await?;

    let repo = VehicleRepository::new(db);

    let rented = repo.set_status(vehicle.id, VehicleStatus::Rented).await?;
    assert!(rented.is_rented());

    let returned = repo
        .check_in(vehicle.id, &target.code, VehicleStatus::Available)
        .await?;
    assert_eq!(returned.status, VehicleStatus::Available);
    assert_eq!(returned.location_code, target.code);

    let moved = repo.set_location(vehicle.id, &vehicle.location_code).await?;
    assert_eq!(moved.location_code, vehicle.location_code);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let result = repo.set_status(999, VehicleStatus::Maintenance).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
