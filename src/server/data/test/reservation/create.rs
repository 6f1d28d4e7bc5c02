use super::*;

/// Tests inserting a priced reservation.
///
/// Expected: Ok with pending reservation retrievable by ID and reference
#[tokio::test]
async fn creates_pending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, vehicle) = factory::helpers::create_vehicle_with_location(db).await?;
    let customer = factory::create_customer(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(NewReservation {
            reference: "OCR-ABCD2345".to_string(),
            vehicle_id: vehicle.id,
            customer_id: customer.id,
            period: period(3, 6),
            pickup_location_code: location.code.clone(),
            dropoff_location_code: location.code.clone(),
            total_price: Money::from_net_cents(15000).unwrap(),
        })
        .await?;

    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.rental_days(), 3);
    assert_eq!(reservation.total_price.net_cents().unwrap(), 15000);
    assert!(reservation.confirmed_at.is_none());

    let by_reference = repo.get_by_reference("OCR-ABCD2345").await?;
    assert_eq!(by_reference.map(|r| r.id), Some(reservation.id));
    assert!(repo.reference_exists("OCR-ABCD2345").await?);
    assert!(!repo.reference_exists("OCR-ZZZZ9999").await?);

    Ok(())
}
