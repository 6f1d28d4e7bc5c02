use super::*;

/// Tests detecting captured payments.
///
/// Expected: false when only refunded payments exist, true once one is captured
#[tokio::test]
async fn ignores_refunded_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::payment::PaymentFactory::new(db, reservation.id)
        .status("Refunded")
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    assert!(!repo.has_captured(reservation.id).await?);

    factory::create_payment(db, reservation.id).await?;
    assert!(repo.has_captured(reservation.id).await?);

    Ok(())
}
