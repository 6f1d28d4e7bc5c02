use super::*;

/// Tests adding a vehicle to the fleet.
///
/// Verifies that enum fields and the daily rate are stored and that new vehicles
/// start out available.
///
/// Expected: Ok with available vehicle created
#[tokio::test]
async fn creates_available_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let params = AddVehicleParams::from_dto(AddVehicleDto {
        name: "BMW X3".to_string(),
        category: VehicleCategory::Suv,
        license_plate: "B-XY 42".to_string(),
        location_code: location.code.clone(),
        seats: 5,
        fuel_type: FuelType::Diesel,
        transmission: Transmission::Automatic,
        daily_rate_net: Decimal::new(8900, 2),
    })
    .unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo.create(params).await?;

    assert!(vehicle.id > 0);
    assert_eq!(vehicle.category, VehicleCategory::Suv);
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(vehicle.location_code, location.code);
    assert_eq!(vehicle.daily_rate.net(), Decimal::new(8900, 2));

    let stored = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.daily_rate_net_cents, 8900);
    assert_eq!(stored.category, "Suv");

    Ok(())
}

/// Tests that license plates are unique.
///
/// Expected: license_plate_exists reports the plate and a second insert fails
#[tokio::test]
async fn rejects_duplicate_license_plate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::vehicle::VehicleFactory::new(db, &location.code)
        .license_plate("B-AB 1234")
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.license_plate_exists("B-AB 1234").await?);
    assert!(!repo.license_plate_exists("B-AB 1235").await?);

    let result = factory::vehicle::VehicleFactory::new(db, &location.code)
        .license_plate("B-AB 1234")
        .build()
        .await;
    assert!(result.is_err());

    Ok(())
}
