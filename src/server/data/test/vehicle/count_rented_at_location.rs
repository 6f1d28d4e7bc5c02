use super::*;

/// Tests counting rented vehicles per location.
///
/// Expected: Ok(1) for the location with one rented vehicle, Ok(0) elsewhere
#[tokio::test]
async fn counts_only_rented_vehicles_at_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let other = factory::create_location(db).await?;
    factory::vehicle::VehicleFactory::new(db, &location.code)
        .status("Rented")
        .build()
        .await?;
    factory::create_vehicle(db, &location.code).await?;

    let repo = VehicleRepository::new(db);

    assert_eq!(repo.count_rented_at_location(&location.code).await?, 1);
    assert_eq!(repo.count_rented_at_location(&other.code).await?, 0);

    Ok(())
}
