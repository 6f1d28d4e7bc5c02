use super::*;

/// Tests creating a new location.
///
/// Verifies that the repository stores the normalized code and details and that
/// new locations start out active.
///
/// Expected: Ok with active location created
#[tokio::test]
async fn creates_active_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let location = repo.create(create_params("ber-hbf")).await?;

    assert_eq!(location.code, "BER-HBF");
    assert_eq!(location.phone, "+49301234567");
    assert_eq!(location.status, LocationStatus::Active);

    let stored = entity::prelude::Location::find_by_id("BER-HBF".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a location with an existing code.
///
/// Expected: Err due to primary key violation
#[tokio::test]
async fn fails_for_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    repo.create(create_params("BER-HBF")).await?;

    let result = repo.create(create_params("BER-HBF")).await;

    assert!(result.is_err());

    Ok(())
}
