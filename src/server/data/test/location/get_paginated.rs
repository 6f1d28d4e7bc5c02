use super::*;

/// Tests listing locations ordered by name.
///
/// Expected: Ok with locations sorted alphabetically and correct total
#[tokio::test]
async fn returns_locations_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("München Flughafen")
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .name("Berlin Hauptbahnhof")
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .name("Hamburg Altona")
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let page = repo.get_paginated(false, 0, 10).await?;

    assert_eq!(page.total, 3);
    let names: Vec<_> = page.items.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Berlin Hauptbahnhof", "Hamburg Altona", "München Flughafen"]
    );

    Ok(())
}

/// Tests that inactive locations can be filtered out.
///
/// Expected: Ok with only active locations
#[tokio::test]
async fn filters_inactive_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_location(db).await?;
    factory::location::LocationFactory::new(db)
        .status("Inactive")
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let page = repo.get_paginated(true, 0, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].code, active.code);

    Ok(())
}

/// Tests pagination across multiple pages.
///
/// Expected: Ok with the second page holding the remainder
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_location(db).await?;
    }

    let repo = LocationRepository::new(db);
    let page = repo.get_paginated(false, 1, 3).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);

    Ok(())
}
