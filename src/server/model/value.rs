//! Validated value objects.
//!
//! Each type can only be constructed through `parse`, which trims and normalizes the
//! input. Holding one of these values means the format rules have already been checked.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::server::error::domain::DomainError;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_NAME_LENGTH: usize = 100;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("valid email regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{10,15}$").expect("valid phone regex"));

// AREA-LETTERS DIGITS with optional E (electric) or H (historic) suffix.
static LICENSE_PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-ZÄÖÜ]{1,3})[- ]([A-Z]{1,2}) ?([1-9][0-9]{0,3})([EH]?)$")
        .expect("valid license plate regex")
});

static POSTAL_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid postal code regex"));

static LOCATION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9-]{3,20}$").expect("valid location code regex"));

/// Lowercased e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim().to_lowercase();

        if value.len() > MAX_EMAIL_LENGTH || !EMAIL_PATTERN.is_match(&value) {
            return Err(DomainError::validation(format!(
                "Invalid email address '{}'",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Phone number normalized to `+<country><number>`; national numbers default to Germany.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let compact: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '/' | '(' | ')'))
            .collect();

        let normalized = if let Some(rest) = compact.strip_prefix("00") {
            format!("+{}", rest)
        } else if compact.starts_with('+') {
            compact
        } else if let Some(rest) = compact.strip_prefix('0') {
            format!("+49{}", rest)
        } else {
            compact
        };

        if !PHONE_PATTERN.is_match(&normalized) {
            return Err(DomainError::validation(format!(
                "Invalid phone number '{}'",
                value.trim()
            )));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// German license plate in the canonical `AREA-LETTERS DIGITS` spelling, e.g. `B-AB 1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate(String);

impl LicensePlate {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let upper = value.trim().to_uppercase();

        let captures = LICENSE_PLATE_PATTERN.captures(&upper).ok_or_else(|| {
            DomainError::validation(format!("Invalid license plate '{}'", value.trim()))
        })?;

        Ok(Self(format!(
            "{}-{} {}{}",
            &captures[1], &captures[2], &captures[3], &captures[4]
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Five digit German postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();

        if !POSTAL_CODE_PATTERN.is_match(value) {
            return Err(DomainError::validation(format!(
                "Invalid postal code '{}'",
                value
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Branch identifier such as `BER-HBF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationCode(String);

impl LocationCode {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim().to_uppercase();

        if !LOCATION_CODE_PATTERN.is_match(&value) {
            return Err(DomainError::validation(format!(
                "Invalid location code '{}'",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Two letter ISO 3166-1 country code, uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim().to_uppercase();

        if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "Invalid country code '{}'",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Trims a required free-text field and enforces a maximum length.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, DomainError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", field)));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    Ok(value.to_string())
}

/// Validates a first or last name.
pub fn person_name(field: &str, value: &str) -> Result<String, DomainError> {
    required_text(field, value, MAX_NAME_LENGTH)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
