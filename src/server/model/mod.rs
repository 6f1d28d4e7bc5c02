//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from DTOs and carry already-validated value objects.

pub mod customer;
pub mod location;
pub mod money;
pub mod notification;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod value;
pub mod vehicle;

use std::str::FromStr;

use sea_orm::DbErr;

const MAX_PER_PAGE: u64 = 100;

/// One page of a paginated query result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Clamps a requested page size to `1..=100`.
pub fn clamp_per_page(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Parses an enum stored as text, surfacing unknown values as a database error.
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}
