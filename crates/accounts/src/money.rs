use serde::{Deserialize, Serialize};

use crestbank_core::{DomainError, DomainResult, ValueObject};

/// Currency of a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
}

impl Currency {
    /// ISO 4217 alphabetic code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    /// Decimal places of the minor unit (cents for USD/EUR, none for JPY).
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Usd | Currency::Eur => 2,
            Currency::Jpy => 0,
        }
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A signed monetary amount in smallest currency unit (e.g., cents).
///
/// Balances use this type directly, so an overdrawn balance can be negative
/// under the permissive policy. Strictly positive movement amounts are
/// [`PositiveMoney`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Zero in the given currency (the balance of a freshly opened account).
    pub fn zero(currency: Currency) -> Self {
        Self { minor: 0, currency }
    }

    pub fn minor_units(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Checked addition; fails on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let minor = self
            .minor
            .checked_add(other.minor)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Money {
            minor,
            currency: self.currency,
        })
    }

    /// Checked subtraction; fails on currency mismatch or overflow.
    pub fn checked_sub(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let minor = self
            .minor
            .checked_sub(other.minor)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Money {
            minor,
            currency: self.currency,
        })
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.code(),
                right: other.currency.code(),
            });
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let places = self.currency.decimal_places();
        if places == 0 {
            return write!(f, "{} {}", self.minor, self.currency.code());
        }
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let scale = 10u64.pow(places);
        write!(
            f,
            "{sign}{}.{:0width$} {}",
            abs / scale,
            abs % scale,
            self.currency.code(),
            width = places as usize
        )
    }
}

/// A strictly positive monetary amount.
///
/// Movement amounts (deposits, withdrawals, transaction records) use this
/// type: zero and negative amounts fail at construction, so an invalid
/// movement can never reach the aggregate. Deserialization routes through the
/// same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct PositiveMoney(Money);

impl PositiveMoney {
    pub fn new(money: Money) -> DomainResult<Self> {
        if !money.is_positive() {
            return Err(DomainError::NonPositiveAmount(money.minor_units()));
        }
        Ok(Self(money))
    }

    pub fn from_minor(minor: i64, currency: Currency) -> DomainResult<Self> {
        Self::new(Money::from_minor(minor, currency))
    }

    pub fn money(&self) -> Money {
        self.0
    }

    pub fn minor_units(&self) -> i64 {
        self.0.minor_units()
    }

    pub fn currency(&self) -> Currency {
        self.0.currency()
    }
}

impl ValueObject for PositiveMoney {}

impl TryFrom<Money> for PositiveMoney {
    type Error = DomainError;

    fn try_from(money: Money) -> DomainResult<Self> {
        Self::new(money)
    }
}

impl From<PositiveMoney> for Money {
    fn from(amount: PositiveMoney) -> Self {
        amount.0
    }
}

impl core::fmt::Display for PositiveMoney {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
