use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingPolicy::Table)
                    .if_not_exists()
                    .col(pk_auto(PricingPolicy::Id))
                    .col(string(PricingPolicy::Category))
                    .col(string_null(PricingPolicy::LocationCode))
                    .col(big_integer(PricingPolicy::DailyRateNetCents))
                    .col(date(PricingPolicy::EffectiveFrom))
                    .col(date_null(PricingPolicy::EffectiveUntil))
                    .col(boolean(PricingPolicy::Active).default(true))
                    .col(
                        timestamp_with_time_zone(PricingPolicy::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pricing_policy_location_code")
                            .from(PricingPolicy::Table, PricingPolicy::LocationCode)
                            .to(Location::Table, Location::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricingPolicy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PricingPolicy {
    Table,
    Id,
    Category,
    LocationCode,
    DailyRateNetCents,
    EffectiveFrom,
    EffectiveUntil,
    Active,
    CreatedAt,
}
