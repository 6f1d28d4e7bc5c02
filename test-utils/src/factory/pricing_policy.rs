//! Pricing policy factory.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pricing policies.
///
/// Defaults to a general (all locations) active policy of 4500 net cents per day that
/// started 30 days ago and has no end date.
pub struct PricingPolicyFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    location_code: Option<String>,
    daily_rate_net_cents: i64,
    effective_from: NaiveDate,
    effective_until: Option<NaiveDate>,
    active: bool,
}

impl<'a> PricingPolicyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, category: impl Into<String>) -> Self {
        Self {
            db,
            category: category.into(),
            location_code: None,
            daily_rate_net_cents: 4500,
            effective_from: Utc::now().date_naive() - Days::new(30),
            effective_until: None,
            active: true,
        }
    }

    pub fn location_code(mut self, location_code: impl Into<String>) -> Self {
        self.location_code = Some(location_code.into());
        self
    }

    pub fn daily_rate_net_cents(mut self, cents: i64) -> Self {
        self.daily_rate_net_cents = cents;
        self
    }

    pub fn effective_from(mut self, date: NaiveDate) -> Self {
        self.effective_from = date;
        self
    }

    pub fn effective_until(mut self, date: Option<NaiveDate>) -> Self {
        self.effective_until = date;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::pricing_policy::Model, DbErr> {
        entity::pricing_policy::ActiveModel {
            category: ActiveValue::Set(self.category),
            location_code: ActiveValue::Set(self.location_code),
            daily_rate_net_cents: ActiveValue::Set(self.daily_rate_net_cents),
            effective_from: ActiveValue::Set(self.effective_from),
            effective_until: ActiveValue::Set(self.effective_until),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a general active policy for a category.
pub async fn create_pricing_policy(
    db: &DatabaseConnection,
    category: &str,
) -> Result<entity::pricing_policy::Model, DbErr> {
    PricingPolicyFactory::new(db, category).build().await
}
