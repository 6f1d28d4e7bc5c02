use super::*;

/// Tests persisting a refund.
///
/// Expected: Ok with status Refunded and refunded_at set
#[tokio::test]
async fn persists_refund() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let payment = factory::create_payment(db, reservation.id).await?;

    let repo = PaymentRepository::new(db);
    let mut domain = repo.get_by_id(payment.id).await?.unwrap();
    domain.refund(Utc::now()).unwrap();
    repo.update_state(&domain).await?;

    let stored = repo.get_by_id(payment.id).await?.unwrap();
    assert_eq!(stored.status, PaymentStatus::Refunded);
    assert!(stored.refunded_at.is_some());

    Ok(())
}
