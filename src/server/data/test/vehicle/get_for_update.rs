use sea_orm::TransactionTrait;

use super::*;

/// Tests locking a vehicle inside a transaction that commits.
///
/// Expected: Ok with the vehicle loaded and the status change visible after commit
#[tokio::test]
async fn loads_vehicle_inside_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;

    let txn = db.begin().await?;
    let repo = VehicleRepository::new(&txn);
    let locked = repo.get_for_update(vehicle.id).await?;
    assert_eq!(locked.map(|v| v.id), Some(vehicle.id));

    repo.set_status(vehicle.id, VehicleStatus::Maintenance).await?;
    txn.commit().await?;

    let stored = VehicleRepository::new(db).get_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Maintenance);

    Ok(())
}

/// Tests that writes made through a transaction are discarded when it is dropped.
///
/// Expected: Ok with the vehicle still `Available`
#[tokio::test]
async fn discards_writes_without_commit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;

    {
        let txn = db.begin().await?;
        VehicleRepository::new(&txn)
            .set_status(vehicle.id, VehicleStatus::Rented)
            .await?;
        txn.rollback().await?;
    }

    let stored = VehicleRepository::new(db).get_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Available);

    Ok(())
}

/// Tests a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    assert!(VehicleRepository::new(&txn).get_for_update(4711).await?.is_none());
    txn.commit().await?;

    Ok(())
}
