use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::FirstName))
                    .col(string(Customer::LastName))
                    .col(string_uniq(Customer::Email))
                    .col(string(Customer::Phone))
                    .col(date(Customer::DateOfBirth))
                    .col(string(Customer::Street))
                    .col(string(Customer::PostalCode))
                    .col(string(Customer::City))
                    .col(string(Customer::Country).default("DE"))
                    .col(string(Customer::LicenseNumber))
                    .col(string(Customer::LicenseIssueCountry))
                    .col(date(Customer::LicenseIssueDate))
                    .col(date(Customer::LicenseExpiryDate))
                    .col(string(Customer::Status).default("Active"))
                    .col(
                        timestamp_with_time_zone(Customer::RegisteredAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Customer::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Street,
    PostalCode,
    City,
    Country,
    LicenseNumber,
    LicenseIssueCountry,
    LicenseIssueDate,
    LicenseExpiryDate,
    Status,
    RegisteredAt,
    UpdatedAt,
}
