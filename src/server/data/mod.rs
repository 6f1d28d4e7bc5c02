//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! bounded context of the rental back end. Repositories use SeaORM entity models internally
//! and return domain models so the service layer never touches entity types. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod customer;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing_policy;
pub mod reservation;
pub mod vehicle;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

use crate::server::model::money::Money;

/// Converts money to the persisted net cents.
fn net_cents(money: &Money) -> Result<i64, DbErr> {
    money
        .net_cents()
        .map_err(|e| DbErr::Custom(format!("Amount out of range: {}", e)))
}
