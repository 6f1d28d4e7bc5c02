use super::*;

/// Tests persisting a status transition.
///
/// Expected: Ok with status and timestamps stored
#[tokio::test]
async fn persists_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let mut domain = repo.get_by_id(reservation.id).await?.unwrap();
    domain.confirm(Utc::now()).unwrap();
    domain.cancel("Flight cancelled".to_string(), Utc::now()).unwrap();

    repo.update_state(&domain).await?;

    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);
    assert_eq!(stored.cancellation_reason.as_deref(), Some("Flight cancelled"));
    assert!(stored.confirmed_at.is_some());
    assert!(stored.cancelled_at.is_some());

    Ok(())
}
