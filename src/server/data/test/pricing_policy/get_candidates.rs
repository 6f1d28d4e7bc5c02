use super::*;

/// Tests that candidates include general and matching location policies only.
///
/// Expected: Ok without policies for other locations, categories or inactive ones
#[tokio::test]
async fn returns_general_and_matching_location_policies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .with_table(PricingPolicy)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let berlin = factory::create_location(db).await?;
    let munich = factory::create_location(db).await?;

    let general = factory::create_pricing_policy(db, "Compact").await?;
    let local = factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .location_code(&berlin.code)
        .build()
        .await?;
    factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .location_code(&munich.code)
        .build()
        .await?;
    factory::pricing_policy::PricingPolicyFactory::new(db, "Compact")
        .active(false)
        .build()
        .await?;
    factory::create_pricing_policy(db, "Van").await?;

    let repo = PricingPolicyRepository::new(db);

    let mut ids: Vec<_> = repo
        .get_candidates(VehicleCategory::Compact, Some(&berlin.code))
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![general.id, local.id]);

    let general_only = repo.get_candidates(VehicleCategory::Compact, None).await?;
    assert_eq!(general_only.len(), 1);
    assert_eq!(general_only[0].id, general.id);

    Ok(())
}
