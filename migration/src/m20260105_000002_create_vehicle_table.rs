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
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Category))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string(Vehicle::LocationCode))
                    .col(integer(Vehicle::Seats))
                    .col(string(Vehicle::FuelType))
                    .col(string(Vehicle::Transmission))
                    .col(big_integer(Vehicle::DailyRateNetCents))
                    .col(string(Vehicle::Status).default("Available"))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_location_code")
                            .from(Vehicle::Table, Vehicle::LocationCode)
                            .to(Location::Table, Location::Code)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_location_category")
                    .table(Vehicle::Table)
                    .col(Vehicle::LocationCode)
                    .col(Vehicle::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Category,
    LicensePlate,
    LocationCode,
    Seats,
    FuelType,
    Transmission,
    DailyRateNetCents,
    Status,
    CreatedAt,
    UpdatedAt,
}
