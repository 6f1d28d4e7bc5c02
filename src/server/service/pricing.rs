use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::vehicle::VehicleCategory,
    server::{
        data::{location::LocationRepository, pricing_policy::PricingPolicyRepository},
        error::{domain::DomainError, AppError},
        model::pricing::{
            select_effective_policy, CalculatePriceParams, CreatePricingPolicyParams, PriceQuote,
            PricingPolicy,
        },
    },
};

pub struct PricingService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PricingService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pricing policy
    ///
    /// # Returns
    /// - `Ok(PricingPolicy)`: The new, active policy
    /// - `Err(AppError::DomainErr)`: The policy names a location that does not exist
    pub async fn create_policy(
        &self,
        params: CreatePricingPolicyParams,
    ) -> Result<PricingPolicy, AppError> {
        if let Some(code) = &params.location_code {
            if LocationRepository::new(self.db)
                .get_by_code(code.as_str())
                .await?
                .is_none()
            {
                return Err(DomainError::validation(format!(
                    "Location {} does not exist",
                    code.as_str()
                ))
                .into());
            }
        }

        let policy = PricingPolicyRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created pricing policy {} for {} at {}",
            policy.id,
            policy.category,
            policy.location_code.as_deref().unwrap_or("all locations")
        );

        Ok(policy)
    }

    pub async fn list_policies(
        &self,
        category: Option<VehicleCategory>,
        active_only: bool,
    ) -> Result<Vec<PricingPolicy>, AppError> {
        Ok(PricingPolicyRepository::new(self.db)
            .list(category, active_only)
            .await?)
    }

    pub async fn deactivate_policy(&self, id: i32) -> Result<PricingPolicy, AppError> {
        let repo = PricingPolicyRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Pricing policy {} not found", id)));
        }

        Ok(repo.deactivate(id).await?)
    }

    /// Finds the policy governing a category at a location on a date
    ///
    /// # Returns
    /// - `Ok(Some(PricingPolicy))`: Location-specific policy if one applies, else the general one
    /// - `Ok(None)`: No active policy covers the date
    pub async fn find_effective_policy(
        &self,
        category: VehicleCategory,
        location_code: Option<&str>,
        date: NaiveDate,
    ) -> Result<Option<PricingPolicy>, AppError> {
        let candidates = PricingPolicyRepository::new(self.db)
            .get_candidates(category, location_code)
            .await?;

        Ok(select_effective_policy(candidates, location_code, date))
    }

    /// Quotes a rental from the effective policy on the pickup date
    pub async fn calculate_price(&self, params: CalculatePriceParams) -> Result<PriceQuote, AppError> {
        let location_code = params.location_code.as_ref().map(|c| c.as_str());

        let policy = self
            .find_effective_policy(params.category, location_code, params.pickup_date)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No pricing policy for {} on {}",
                    params.category, params.pickup_date
                ))
            })?;

        Ok(PriceQuote::new(
            params.category,
            policy.daily_rate,
            params.pickup_date,
            params.return_date,
        )?)
    }
}
