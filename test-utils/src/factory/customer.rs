//! Customer factory for creating test customers.

use crate::factory::helpers::next_id;
use chrono::{Months, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::customer::CustomerFactory;
///
/// let customer = CustomerFactory::new(&db)
///     .last_name("Schmidt")
///     .status("Suspended")
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    license_issue_date: NaiveDate,
    license_expiry_date: NaiveDate,
    status: String,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Max Mustermann{id}"`
    /// - email: `"customer{id}@example.de"`
    /// - date_of_birth: 30 years ago
    /// - license: issued 10 years ago, expiring in 5 years
    /// - status: `"Active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();

        Self {
            db,
            first_name: "Max".to_string(),
            last_name: format!("Mustermann{}", id),
            email: format!("customer{}@example.de", id),
            date_of_birth: today - Months::new(12 * 30),
            license_issue_date: today - Months::new(12 * 10),
            license_expiry_date: today + Months::new(12 * 5),
            status: "Active".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn license_expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.license_expiry_date = expiry_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now();

        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("+4915123456789".to_string()),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            street: ActiveValue::Set("Hauptstraße 1".to_string()),
            postal_code: ActiveValue::Set("10115".to_string()),
            city: ActiveValue::Set("Berlin".to_string()),
            country: ActiveValue::Set("DE".to_string()),
            license_number: ActiveValue::Set("B072RRE2I55".to_string()),
            license_issue_country: ActiveValue::Set("DE".to_string()),
            license_issue_date: ActiveValue::Set(self.license_issue_date),
            license_expiry_date: ActiveValue::Set(self.license_expiry_date),
            status: ActiveValue::Set(self.status),
            registered_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active adult customer with a valid license.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
