//! VAT-inclusive money value object.
//!
//! Every price in the system is a net amount with German VAT (19%) added on top. Only
//! the net amount is persisted, as integer euro cents; VAT and gross are always derived.
//! Both net and gross must fit into `i64` cents, so every constructor and arithmetic
//! operation is checked.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{model::api::MoneyDto, server::error::domain::DomainError};

/// German standard VAT rate (19%).
pub const VAT_RATE: Decimal = Decimal::from_parts(19, 0, 0, false, 2);

pub const CURRENCY: &str = "EUR";

/// A net amount together with its VAT and gross amounts, all in EUR with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    net: Decimal,
    vat: Decimal,
    gross: Decimal,
}

impl Money {
    /// Builds money from a net amount, rounding to cents and adding VAT.
    ///
    /// # Returns
    /// - `Ok(Money)` - Net, VAT and gross amounts
    /// - `Err(DomainError::Validation)` - Net amount is negative or too large to store
    pub fn from_net(net: Decimal) -> Result<Self, DomainError> {
        if net.is_sign_negative() && !net.is_zero() {
            return Err(DomainError::validation("Amount must not be negative"));
        }

        Self::from_rounded_net(round_cents(net))
    }

    /// Builds money from a gross amount by extracting the contained VAT.
    ///
    /// The net amount is rounded to cents and VAT is whatever remains, so
    /// `net + vat == gross` holds exactly.
    pub fn from_gross(gross: Decimal) -> Result<Self, DomainError> {
        if gross.is_sign_negative() && !gross.is_zero() {
            return Err(DomainError::validation("Amount must not be negative"));
        }

        let gross = round_cents(gross);
        to_cents(gross)?;
        let net = round_cents(gross / (Decimal::ONE + VAT_RATE));

        Ok(Self {
            net,
            vat: gross - net,
            gross,
        })
    }

    pub fn zero() -> Self {
        Self {
            net: Decimal::ZERO,
            vat: Decimal::ZERO,
            gross: Decimal::ZERO,
        }
    }

    /// Restores money from persisted net cents.
    pub fn from_net_cents(cents: i64) -> Result<Self, DomainError> {
        Self::from_net(Decimal::new(cents, 2))
    }

    /// Net amount as integer cents, the persisted representation.
    pub fn net_cents(&self) -> Result<i64, DomainError> {
        to_cents(self.net)
    }

    /// Gross amount as integer cents.
    pub fn gross_cents(&self) -> Result<i64, DomainError> {
        to_cents(self.gross)
    }

    /// Multiplies the net amount by a count (e.g. rental days) and recomputes VAT.
    pub fn times(&self, count: i64) -> Result<Self, DomainError> {
        if count < 0 {
            return Err(DomainError::validation("Multiplier must not be negative"));
        }

        let net = self
            .net
            .checked_mul(Decimal::from(count))
            .ok_or_else(|| out_of_range(self.net))?;

        Self::from_rounded_net(net)
    }

    /// Sums the net amounts and recomputes VAT on the total.
    pub fn checked_add(&self, other: &Money) -> Result<Self, DomainError> {
        let net = self
            .net
            .checked_add(other.net)
            .ok_or_else(|| out_of_range(self.net))?;

        Self::from_rounded_net(net)
    }

    pub fn net(&self) -> Decimal {
        self.net
    }

    pub fn vat(&self) -> Decimal {
        self.vat
    }

    pub fn gross(&self) -> Decimal {
        self.gross
    }

    pub fn is_zero(&self) -> bool {
        self.net.is_zero()
    }

    pub fn into_dto(self) -> MoneyDto {
        MoneyDto {
            net: self.net,
            vat: self.vat,
            gross: self.gross,
            currency: CURRENCY.to_string(),
        }
    }

    fn from_rounded_net(net: Decimal) -> Result<Self, DomainError> {
        let vat = round_cents(net.checked_mul(VAT_RATE).ok_or_else(|| out_of_range(net))?);
        let gross = net.checked_add(vat).ok_or_else(|| out_of_range(net))?;

        // gross >= net, so this bounds both persisted amounts
        to_cents(gross)?;

        Ok(Self { net, vat, gross })
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn to_cents(value: Decimal) -> Result<i64, DomainError> {
    let mut scaled = round_cents(value);
    scaled.rescale(2);

    i64::try_from(scaled.mantissa()).map_err(|_| out_of_range(value))
}

fn out_of_range(value: Decimal) -> DomainError {
    DomainError::validation(format!("Amount {} is out of range", value))
}
