use super::*;

/// Tests finding confirmed reservations whose pickup day has passed.
///
/// Expected: Ok with only the overdue confirmed reservation
#[tokio::test]
async fn returns_only_overdue_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let reserve = || {
        factory::reservation::ReservationFactory::new(db, vehicle.id, customer.id, &location.code)
    };

    let overdue = reserve()
        .period(today() - Days::new(3), today() - Days::new(1))
        .status("Confirmed")
        .build()
        .await?;
    reserve()
        .period(today(), today() + Days::new(2))
        .status("Confirmed")
        .build()
        .await?;
    reserve()
        .period(today() - Days::new(3), today() - Days::new(1))
        .status("Pending")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_overdue_confirmed(today()).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, overdue.id);

    Ok(())
}
