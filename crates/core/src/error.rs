//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
///
/// Monetary fields are minor units (e.g. cents) so this crate stays free of
/// the money types defined by the account domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text or identifier was empty, whitespace-only, or nil.
    #[error("required value is empty: {0}")]
    EmptyValue(String),

    /// A monetary amount that must be strictly positive was zero or negative.
    #[error("amount must be positive, got {0} minor units")]
    NonPositiveAmount(i64),

    /// A withdrawal was denied because the balance does not cover it.
    #[error("insufficient funds: requested {requested}, available {available} minor units")]
    InsufficientFunds { requested: i64, available: i64 },

    /// Arithmetic across two different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Checked monetary arithmetic left the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. registering the same account twice).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn empty_value(what: impl Into<String>) -> Self {
        Self::EmptyValue(what.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
