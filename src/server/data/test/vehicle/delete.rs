use super::*;

/// Tests deleting a vehicle.
///
/// Expected: Ok with vehicle gone
#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;

    let repo = VehicleRepository::new(db);
    repo.delete(vehicle.id).await?;

    assert!(repo.get_by_id(vehicle.id).await?.is_none());

    Ok(())
}
