use super::*;

/// Tests listing policies by category and activity.
///
/// Expected: Ok with filters applied and newest effective_from first
#[tokio::test]
async fn filters_by_category_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .with_table(PricingPolicy)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let older = factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .effective_from(today - Days::new(100))
        .build()
        .await?;
    let newer = factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .effective_from(today - Days::new(10))
        .build()
        .await?;
    factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .active(false)
        .build()
        .await?;
    factory::create_pricing_policy(db, "Suv").await?;

    let repo = PricingPolicyRepository::new(db);

    let all = repo.list(None, false).await?;
    assert_eq!(all.len(), 4);

    let compact = repo.list(Some(VehicleCategory::Compact), true).await?;
    let ids: Vec<_> = compact.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
