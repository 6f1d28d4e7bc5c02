pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_location_table;
mod m20260105_000002_create_vehicle_table;
mod m20260105_000003_create_customer_table;
mod m20260106_000004_create_pricing_policy_table;
mod m20260106_000005_create_reservation_table;
mod m20260107_000006_create_payment_table;
mod m20260107_000007_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_location_table::Migration),
            Box::new(m20260105_000002_create_vehicle_table::Migration),
            Box::new(m20260105_000003_create_customer_table::Migration),
            Box::new(m20260106_000004_create_pricing_policy_table::Migration),
            Box::new(m20260106_000005_create_reservation_table::Migration),
            Box::new(m20260107_000006_create_payment_table::Migration),
            Box::new(m20260107_000007_create_notification_table::Migration),
        ]
    }
}
