use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::string_enum;

string_enum! {
    /// Only `Active` customers may book.
    pub enum CustomerStatus { Active, Suspended, Blocked }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct AddressDto {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2 country code, defaults to `DE`.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "DE".to_string()
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct DriversLicenseDto {
    pub number: String,
    pub issue_country: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: AddressDto,
    pub drivers_license: DriversLicenseDto,
    pub status: CustomerStatus,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct RegisterCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: AddressDto,
    pub drivers_license: DriversLicenseDto,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UpdateCustomerProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressDto,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ChangeCustomerStatusDto {
    pub status: CustomerStatus,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchQuery {
    /// Case-insensitive fragment of the first or last name.
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<CustomerStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "crate::model::api::default_per_page")]
    pub per_page: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedCustomersDto {
    pub customers: Vec<CustomerDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
