//! Location factory for creating test rental branches.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::location::LocationFactory;
///
/// let location = LocationFactory::new(&db)
///     .code("MUC-FLG")
///     .name("München Flughafen")
///     .status("Inactive")
///     .build()
///     .await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    city: String,
    status: String,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - code: `"LOC-{id}"` where id is auto-incremented
    /// - name: `"Branch {id}"`
    /// - city: `"Berlin"`
    /// - status: `"Active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LocationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("LOC-{}", id),
            name: format!("Branch {}", id),
            city: "Berlin".to_string(),
            status: "Active".to_string(),
        }
    }

    /// Sets the location code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the status (`"Active"` or `"Inactive"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created location entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();

        entity::location::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            street: ActiveValue::Set("Europaplatz 1".to_string()),
            postal_code: ActiveValue::Set("10557".to_string()),
            city: ActiveValue::Set(self.city),
            phone: ActiveValue::Set("+49301234567".to_string()),
            email: ActiveValue::Set("branch@orange-rental.de".to_string()),
            opening_hours: ActiveValue::Set("Mo-Fr 07:00-20:00".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
