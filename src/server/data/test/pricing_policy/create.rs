use super::*;

/// Tests creating a location-specific pricing policy.
///
/// Expected: Ok with active policy bound to the location
#[tokio::test]
async fn creates_location_specific_policy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Location)
        .with_table(PricingPolicy)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let today = Utc::now().date_naive();

    let params = CreatePricingPolicyParams::from_dto(CreatePricingPolicyDto {
        category: VehicleCategory::Luxury,
        location_code: Some(location.code.clone()),
        daily_rate_net: Decimal::new(19900, 2),
        effective_from: today,
        effective_until: Some(today + Days::new(90)),
    })
    .unwrap();

    let repo = PricingPolicyRepository::new(db);
    let policy = repo.create(params).await?;

    assert!(policy.active);
    assert_eq!(policy.category, VehicleCategory::Luxury);
    assert_eq!(policy.location_code.as_deref(), Some(location.code.as_str()));
    assert_eq!(policy.daily_rate.net(), Decimal::new(19900, 2));
    assert!(policy.applies_on(today));

    Ok(())
}
