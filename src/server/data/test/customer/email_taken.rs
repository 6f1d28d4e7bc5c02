use super::*;

/// Tests the email uniqueness check.
///
/// Verifies that a customer's own email does not count as taken when excluded.
///
/// Expected: true for other customers, false for the owner
#[tokio::test]
async fn ignores_excluded_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db)
        .email("max@example.de")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.email_taken("max@example.de", None).await?);
    assert!(!repo.email_taken("max@example.de", Some(customer.id)).await?);
    assert!(!repo.email_taken("other@example.de", None).await?);

    Ok(())
}
