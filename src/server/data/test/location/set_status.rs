use super::*;

/// Tests deactivating and reactivating a location.
///
/// Expected: Ok with status toggled each time
#[tokio::test]
async fn toggles_location_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let repo = LocationRepository::new(db);

    let inactive = repo
        .set_status(&location.code, LocationStatus::Inactive)
        .await?;
    assert_eq!(inactive.status, LocationStatus::Inactive);
    assert!(!inactive.is_active());

    let active = repo
        .set_status(&location.code, LocationStatus::Active)
        .await?;
    assert!(active.is_active());

    Ok(())
}
