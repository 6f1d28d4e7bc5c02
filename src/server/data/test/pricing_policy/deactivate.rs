use super::*;

/// Tests deactivating a policy.
///
/// Expected: Ok with policy inactive, Err(RecordNotFound) for unknown IDs
#[tokio::test]
async fn deactivates_policy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .with_table(PricingPolicy)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let policy = factory::create_pricing_policy(db, "Economy").await?;

    let repo = PricingPolicyRepository::new(db);
    let deactivated = repo.deactivate(policy.id).await?;

    assert!(!deactivated.active);
    assert!(!deactivated.applies_on(Utc::now().date_naive()));
    assert!(matches!(
        repo.deactivate(policy.id + 100).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
