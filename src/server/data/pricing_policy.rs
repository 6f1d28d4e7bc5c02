use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use super::net_cents;
use crate::{
    model::vehicle::VehicleCategory,
    server::model::pricing::{CreatePricingPolicyParams, PricingPolicy},
};

pub struct PricingPolicyRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PricingPolicyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active pricing policy
    pub async fn create(&self, params: CreatePricingPolicyParams) -> Result<PricingPolicy, DbErr> {
        let policy = entity::pricing_policy::ActiveModel {
            category: ActiveValue::Set(params.category.to_string()),
            location_code: ActiveValue::Set(params.location_code.map(|c| c.into_inner())),
            daily_rate_net_cents: ActiveValue::Set(net_cents(&params.daily_rate)?),
            effective_from: ActiveValue::Set(params.effective_from),
            effective_until: ActiveValue::Set(params.effective_until),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PricingPolicy::from_entity(policy)
    }

    /// Gets a pricing policy by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PricingPolicy>, DbErr> {
        entity::prelude::PricingPolicy::find_by_id(id)
            .one(self.db)
            .await?
            .map(PricingPolicy::from_entity)
            .transpose()
    }

    /// Lists policies ordered by category and most recent `effective_from` first
    ///
    /// # Arguments
    /// - `category`: Restrict to one vehicle category
    /// - `active_only`: Skip deactivated policies
    pub async fn list(
        &self,
        category: Option<VehicleCategory>,
        active_only: bool,
    ) -> Result<Vec<PricingPolicy>, DbErr> {
        use entity::pricing_policy::Column;

        let mut query = entity::prelude::PricingPolicy::find();
        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }
        if active_only {
            query = query.filter(Column::Active.eq(true));
        }

        query
            .order_by_asc(Column::Category)
            .order_by_desc(Column::EffectiveFrom)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PricingPolicy::from_entity)
            .collect()
    }

    /// Gets the active policies of a category that could apply to a location
    ///
    /// Returns general policies plus those for `location_code`; the caller picks the
    /// effective one by date and specificity.
    pub async fn get_candidates(
        &self,
        category: VehicleCategory,
        location_code: Option<&str>,
    ) -> Result<Vec<PricingPolicy>, DbErr> {
        use entity::pricing_policy::Column;

        let mut location_filter = sea_orm::Condition::any().add(Column::LocationCode.is_null());
        if let Some(code) = location_code {
            location_filter = location_filter.add(Column::LocationCode.eq(code));
        }

        entity::prelude::PricingPolicy::find()
            .filter(Column::Category.eq(category.as_str()))
            .filter(Column::Active.eq(true))
            .filter(location_filter)
            .all(self.db)
            .await?
            .into_iter()
            .map(PricingPolicy::from_entity)
            .collect()
    }

    /// Marks a policy inactive
    pub async fn deactivate(&self, id: i32) -> Result<PricingPolicy, DbErr> {
        let policy = entity::prelude::PricingPolicy::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Pricing policy with id {} not found",
                id
            )))?;

        let mut active_model = policy.into_active_model();
        active_model.active = ActiveValue::Set(false);

        PricingPolicy::from_entity(active_model.update(self.db).await?)
    }
}
