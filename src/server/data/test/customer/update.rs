use super::*;

/// Tests updating the profile of a customer.
///
/// Expected: Ok with new name, email and address
#[tokio::test]
async fn updates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let params = UpdateCustomerProfileParams::from_dto(UpdateCustomerProfileDto {
        first_name: "Moritz".to_string(),
        last_name: "Neumann".to_string(),
        email: "moritz@example.de".to_string(),
        phone: "+49 170 1112223".to_string(),
        address: AddressDto {
            city: "Potsdam".to_string(),
            postal_code: "14467".to_string(),
            ..address()
        },
    })
    .unwrap();

    let repo = CustomerRepository::new(db);
    let updated = repo.update_profile(customer.id, params).await?;

    assert_eq!(updated.full_name(), "Moritz Neumann");
    assert_eq!(updated.email, "moritz@example.de");
    assert_eq!(updated.address.city, "Potsdam");
    assert_eq!(updated.date_of_birth, customer.date_of_birth);

    Ok(())
}

/// Tests replacing the driver's license and changing status.
///
/// Expected: Ok with new license data and status
#[tokio::test]
async fn updates_license_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let today = Utc::now().date_naive();

    let license = DriversLicense::from_dto(
        DriversLicenseDto {
            number: "NEW12345".to_string(),
            issue_country: "AT".to_string(),
            issue_date: today - Months::new(1),
            expiry_date: today + Months::new(12 * 15),
        },
        today,
    )
    .unwrap();

    let repo = CustomerRepository::new(db);
    let updated = repo.update_drivers_license(customer.id, license).await?;
    assert_eq!(updated.drivers_license.number, "NEW12345");
    assert_eq!(updated.drivers_license.issue_country, "AT");

    let blocked = repo.set_status(customer.id, CustomerStatus::Blocked).await?;
    assert_eq!(blocked.status, CustomerStatus::Blocked);
    assert!(!blocked.can_book());

    Ok(())
}
