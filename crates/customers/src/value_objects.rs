use serde::{Deserialize, Serialize};

use crestbank_core::{DomainError, DomainResult, ValueObject};

/// A customer's display name: non-empty, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let trimmed = text.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::empty_value("Name"));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(text: String) -> DomainResult<Self> {
        Self::new(text)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A customer's social security number: non-empty, stored trimmed.
///
/// No country-specific format check; the only invariant is presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ssn(String);

impl Ssn {
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let trimmed = text.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::empty_value("Ssn"));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Ssn {}

impl core::fmt::Display for Ssn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ssn {
    type Error = DomainError;

    fn try_from(text: String) -> DomainResult<Self> {
        Self::new(text)
    }
}

impl From<Ssn> for String {
    fn from(ssn: Ssn) -> Self {
        ssn.0
    }
}
