use super::*;

/// Tests registering a customer.
///
/// Verifies that the nested address and license are flattened into the row and read
/// back, and that new customers are active.
///
/// Expected: Ok with active customer created
#[tokio::test]
async fn creates_active_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let params = RegisterCustomerParams::from_dto(
        RegisterCustomerDto {
            first_name: "Erika".to_string(),
            last_name: "Musterfrau".to_string(),
            email: "Erika@Example.de".to_string(),
            phone: "0151 9876543".to_string(),
            date_of_birth: today - Months::new(12 * 40),
            address: address(),
            drivers_license: DriversLicenseDto {
                number: "X1234567".to_string(),
                issue_country: "DE".to_string(),
                issue_date: today - Months::new(12 * 20),
                expiry_date: today + Months::new(12 * 3),
            },
        },
        today,
    )
    .unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params).await?;

    assert!(customer.id > 0);
    assert_eq!(customer.email, "erika@example.de");
    assert_eq!(customer.status, CustomerStatus::Active);
    assert_eq!(customer.address.postal_code, "10115");
    assert_eq!(customer.drivers_license.number, "X1234567");

    let found = repo.find_by_email("erika@example.de").await?;
    assert_eq!(found.map(|c| c.id), Some(customer.id));

    Ok(())
}
