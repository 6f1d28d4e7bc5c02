use super::*;

fn params() -> ReservationSearchParams {
    ReservationSearchParams {
        page: 0,
        per_page: 10,
        ..Default::default()
    }
}

/// Tests that search returns the latest pickup first and applies filters.
///
/// Expected: Ok with ordered, filtered results
#[tokio::test]
async fn orders_by_pickup_desc_and_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;
    let other_customer = factory::create_customer(db).await?;

    let early = factory::reservation::ReservationFactory::new(
        db,
        vehicle.id,
        customer.id,
        &location.code,
    )
    .period(today() + Days::new(1), today() + Days::new(2))
    .build()
    .await?;
    let late = factory::reservation::ReservationFactory::new(
        db,
        vehicle.id,
        customer.id,
        &location.code,
    )
    .period(today() + Days::new(20), today() + Days::new(22))
    .status("Confirmed")
    .build()
    .await?;
    factory::create_reservation(db, vehicle.id, other_customer.id, &location.code).await?;

    let repo = ReservationRepository::new(db);

    let mine = repo
        .search(&ReservationSearchParams {
            customer_id: Some(customer.id),
            ..params()
        })
        .await?;
    let ids: Vec<_> = mine.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    let confirmed = repo
        .search(&ReservationSearchParams {
            status: Some(ReservationStatus::Confirmed),
            ..params()
        })
        .await?;
    assert_eq!(confirmed.total, 1);

    let in_range = repo
        .search(&ReservationSearchParams {
            from: Some(today()),
            to: Some(today() + Days::new(3)),
            ..params()
        })
        .await?;
    assert_eq!(in_range.total, 1);
    assert_eq!(in_range.items[0].id, early.id);

    let history = repo.get_by_customer(customer.id).await?;
    assert_eq!(history.len(), 2);

    Ok(())
}
