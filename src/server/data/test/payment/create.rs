use super::*;

/// Tests recording a captured payment.
///
/// Expected: Ok with payment listed for its reservation
#[tokio::test]
async fn creates_payment_for_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(
            reservation.id,
            17850,
            PaymentMethod::PayPal,
            PaymentStatus::Captured,
            "TX-ABCDEFGH23456789".to_string(),
        )
        .await?;

    assert_eq!(payment.amount_cents, 17850);
    assert_eq!(payment.method, PaymentMethod::PayPal);
    assert!(payment.is_captured());
    assert!(repo.transaction_reference_exists("TX-ABCDEFGH23456789").await?);

    let listed = repo.get_by_reservation(reservation.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, payment.id);

    Ok(())
}
