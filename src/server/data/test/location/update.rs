use super::*;

/// Tests replacing the details of a location.
///
/// Expected: Ok with new details stored and code unchanged
#[tokio::test]
async fn updates_location_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let params = UpdateLocationParams::from_dto(
        &location.code,
        UpdateLocationDto {
            name: "Hamburg Hauptbahnhof".to_string(),
            street: "Hachmannplatz 16".to_string(),
            postal_code: "20099".to_string(),
            city: "Hamburg".to_string(),
            phone: "+49 40 1234567".to_string(),
            email: "hamburg@orange-rental.de".to_string(),
            opening_hours: "Mo-So 06:00-23:00".to_string(),
        },
    )
    .unwrap();

    let repo = LocationRepository::new(db);
    let updated = repo.update(&location.code, params.details).await?;

    assert_eq!(updated.code, location.code);
    assert_eq!(updated.name, "Hamburg Hauptbahnhof");
    assert_eq!(updated.city, "Hamburg");
    assert_eq!(updated.phone, "+49401234567");

    Ok(())
}

/// Tests updating a location that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let result = repo
        .update("NOPE", create_params("NOPE").details)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
