//! Domain models for customers and their driving licenses.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use sea_orm::DbErr;

use crate::{
    model::customer::{
        AddressDto, CustomerDto, CustomerSearchQuery, CustomerStatus, DriversLicenseDto,
        PaginatedCustomersDto, RegisterCustomerDto, UpdateCustomerProfileDto,
    },
    server::{
        error::domain::DomainError,
        model::{
            clamp_per_page, parse_column,
            value::{person_name, required_text, CountryCode, Email, PhoneNumber, PostalCode},
            Page,
        },
    },
};

pub const MINIMUM_AGE: u32 = 18;

const MAX_STREET_LENGTH: usize = 200;
const MAX_CITY_LENGTH: usize = 100;

static LICENSE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]{5,20}$").expect("valid license number regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn from_dto(dto: AddressDto) -> Result<Self, DomainError> {
        Ok(Self {
            street: required_text("Street", &dto.street, MAX_STREET_LENGTH)?,
            postal_code: PostalCode::parse(&dto.postal_code)?.into_inner(),
            city: required_text("City", &dto.city, MAX_CITY_LENGTH)?,
            country: CountryCode::parse(&dto.country)?.into_inner(),
        })
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            street: self.street,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriversLicense {
    pub number: String,
    pub issue_country: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl DriversLicense {
    /// Validates a license as of `today`.
    ///
    /// The issue date may not lie in the future and the license must still be valid
    /// after `today`.
    pub fn from_dto(dto: DriversLicenseDto, today: NaiveDate) -> Result<Self, DomainError> {
        let number: String = dto
            .number
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect::<String>()
            .to_uppercase();

        if !LICENSE_NUMBER_PATTERN.is_match(&number) {
            return Err(DomainError::validation(
                "License number must be 5 to 20 letters or digits",
            ));
        }
        if dto.issue_date > today {
            return Err(DomainError::validation(
                "License issue date must not be in the future",
            ));
        }
        if dto.expiry_date <= dto.issue_date {
            return Err(DomainError::validation(
                "License expiry date must be after the issue date",
            ));
        }
        if dto.expiry_date <= today {
            return Err(DomainError::validation("Driver's license has expired"));
        }

        Ok(Self {
            number,
            issue_country: CountryCode::parse(&dto.issue_country)?.into_inner(),
            issue_date: dto.issue_date,
            expiry_date: dto.expiry_date,
        })
    }

    /// Whether the license is still valid on the given day.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.issue_date <= date && date <= self.expiry_date
    }

    pub fn into_dto(self) -> DriversLicenseDto {
        DriversLicenseDto {
            number: self.number,
            issue_country: self.issue_country,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub drivers_license: DriversLicense,
    pub status: CustomerStatus,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            status: parse_column("customer.status", &entity.status)?,
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            date_of_birth: entity.date_of_birth,
            address: Address {
                street: entity.street,
                postal_code: entity.postal_code,
                city: entity.city,
                country: entity.country,
            },
            drivers_license: DriversLicense {
                number: entity.license_number,
                issue_country: entity.license_issue_country,
                issue_date: entity.license_issue_date,
                expiry_date: entity.license_expiry_date,
            },
            registered_at: entity.registered_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn can_book(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address.into_dto(),
            drivers_license: self.drivers_license.into_dto(),
            status: self.status,
            registered_at: self.registered_at,
            updated_at: self.updated_at,
        }
    }
}

/// Full years between `date_of_birth` and `today`, or `None` for a future birth date.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(date_of_birth)
}

/// Parameters for registering a customer.
#[derive(Debug, Clone)]
pub struct RegisterCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub drivers_license: DriversLicense,
}

impl RegisterCustomerParams {
    pub fn from_dto(dto: RegisterCustomerDto, today: NaiveDate) -> Result<Self, DomainError> {
        match age_on(dto.date_of_birth, today) {
            Some(age) if age >= MINIMUM_AGE => {}
            _ => {
                return Err(DomainError::validation(format!(
                    "Customer must be at least {} years old",
                    MINIMUM_AGE
                )))
            }
        }

        Ok(Self {
            first_name: person_name("First name", &dto.first_name)?,
            last_name: person_name("Last name", &dto.last_name)?,
            email: Email::parse(&dto.email)?,
            phone: PhoneNumber::parse(&dto.phone)?,
            date_of_birth: dto.date_of_birth,
            address: Address::from_dto(dto.address)?,
            drivers_license: DriversLicense::from_dto(dto.drivers_license, today)?,
        })
    }
}

/// Parameters for updating a customer's contact data.
#[derive(Debug, Clone)]
pub struct UpdateCustomerProfileParams {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub address: Address,
}

impl UpdateCustomerProfileParams {
    pub fn from_dto(dto: UpdateCustomerProfileDto) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: person_name("First name", &dto.first_name)?,
            last_name: person_name("Last name", &dto.last_name)?,
            email: Email::parse(&dto.email)?,
            phone: PhoneNumber::parse(&dto.phone)?,
            address: Address::from_dto(dto.address)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerSearchParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<CustomerStatus>,
    pub page: u64,
    pub per_page: u64,
}

impl CustomerSearchParams {
    pub fn from_query(query: CustomerSearchQuery) -> Self {
        let fragment = |value: Option<String>| {
            value
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
        };

        Self {
            name: fragment(query.name),
            email: fragment(query.email),
            status: query.status,
            page: query.page,
            per_page: clamp_per_page(query.per_page),
        }
    }
}

impl Page<Customer> {
    pub fn into_dto(self) -> PaginatedCustomersDto {
        PaginatedCustomersDto {
            customers: self.items.into_iter().map(Customer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
