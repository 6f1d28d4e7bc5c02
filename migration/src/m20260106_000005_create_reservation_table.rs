use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_vehicle_table::Vehicle,
    m20260105_000003_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string_uniq(Reservation::Reference))
                    .col(integer(Reservation::VehicleId))
                    .col(integer(Reservation::CustomerId))
                    .col(date(Reservation::PickupDate))
                    .col(date(Reservation::ReturnDate))
                    .col(string(Reservation::PickupLocationCode))
                    .col(string(Reservation::DropoffLocationCode))
                    .col(big_integer(Reservation::TotalPriceNetCents))
                    .col(string(Reservation::Status).default("Pending"))
                    .col(text_null(Reservation::CancellationReason))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Reservation::ConfirmedAt))
                    .col(timestamp_with_time_zone_null(Reservation::CancelledAt))
                    .col(timestamp_with_time_zone_null(Reservation::PickedUpAt))
                    .col(timestamp_with_time_zone_null(Reservation::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_vehicle_id")
                            .from(Reservation::Table, Reservation::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer_id")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_vehicle_period")
                    .table(Reservation::Table)
                    .col(Reservation::VehicleId)
                    .col(Reservation::PickupDate)
                    .col(Reservation::ReturnDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Reference,
    VehicleId,
    CustomerId,
    PickupDate,
    ReturnDate,
    PickupLocationCode,
    DropoffLocationCode,
    TotalPriceNetCents,
    Status,
    CancellationReason,
    CreatedAt,
    ConfirmedAt,
    CancelledAt,
    PickedUpAt,
    CompletedAt,
}
