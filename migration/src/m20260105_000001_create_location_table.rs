use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string(Location::Code).primary_key())
                    .col(string(Location::Name))
                    .col(string(Location::Street))
                    .col(string(Location::PostalCode))
                    .col(string(Location::City))
                    .col(string(Location::Phone))
                    .col(string(Location::Email))
                    .col(string(Location::OpeningHours))
                    .col(string(Location::Status).default("Active"))
                    .col(
                        timestamp_with_time_zone(Location::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Location::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Code,
    Name,
    Street,
    PostalCode,
    City,
    Phone,
    Email,
    OpeningHours,
    Status,
    CreatedAt,
    UpdatedAt,
}
