use super::*;

/// Tests that search orders by daily rate, then name.
///
/// Expected: Ok with cheapest vehicle first
#[tokio::test]
async fn orders_by_rate_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::vehicle::VehicleFactory::new(db, &location.code)
        .name("Zeta")
        .daily_rate_net_cents(4000)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, &location.code)
        .name("Alpha")
        .daily_rate_net_cents(4000)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, &location.code)
        .name("Cheap")
        .daily_rate_net_cents(2500)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let page = repo.search(&search_params(), &[]).await?;

    let names: Vec<_> = page.items.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap", "Alpha", "Zeta"]);

    Ok(())
}

/// Tests filtering by location, category, seats and status.
///
/// Expected: Ok with only the matching vehicle
#[tokio::test]
async fn applies_attribute_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let berlin = factory::create_location(db).await?;
    let munich = factory::create_location(db).await?;

    let target = factory::vehicle::VehicleFactory::new(db, &berlin.code)
        .category("Van")
        .seats(9)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, &berlin.code)
        .category("Van")
        .seats(9)
        .status("Maintenance")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, &berlin.code)
        .category("Van")
        .seats(5)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, &munich.code)
        .category("Van")
        .seats(9)
        .build()
        .await?;
    factory::create_vehicle(db, &berlin.code).await?;

    let params = VehicleSearchParams {
        location_code: Some(berlin.code.clone()),
        category: Some(VehicleCategory::Van),
        min_seats: Some(7),
        status: Some(VehicleStatus::Available),
        ..search_params()
    };

    let repo = VehicleRepository::new(db);
    let page = repo.search(&params, &[]).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, target.id);

    Ok(())
}

/// Tests that excluded vehicle IDs are left out.
///
/// Expected: Ok without the excluded vehicle
#[tokio::test]
async fn skips_excluded_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let booked = factory::create_vehicle(db, &location.code).await?;
    let free = factory::create_vehicle(db, &location.code).await?;

    let repo = VehicleRepository::new(db);
    let page = repo.search(&search_params(), &[booked.id]).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, free.id);

    Ok(())
}
