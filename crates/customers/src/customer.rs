use serde::{Deserialize, Serialize};

use crestbank_core::{AccountId, CustomerId, DomainError, DomainResult, Entity};

use crate::value_objects::{Name, Ssn};

/// Entity: a bank customer.
///
/// Keeps identity across state changes and records which accounts the
/// customer owns. Opening the accounts themselves is the account context's
/// job; this entity only tracks ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: Name,
    ssn: Ssn,
    accounts: Vec<AccountId>,
}

impl Customer {
    /// A new customer with a fresh identity and no accounts yet.
    pub fn new(name: Name, ssn: Ssn) -> Self {
        Self::with_id(CustomerId::new(), name, ssn)
    }

    /// Adopt an existing identity.
    pub fn with_id(id: CustomerId, name: Name, ssn: Ssn) -> Self {
        Self {
            id,
            name,
            ssn,
            accounts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ssn(&self) -> &Ssn {
        &self.ssn
    }

    /// Accounts registered to this customer, in registration order.
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    /// Record ownership of an account.
    ///
    /// Registering the same account twice is a conflict.
    pub fn register_account(&mut self, account_id: AccountId) -> DomainResult<()> {
        if self.accounts.contains(&account_id) {
            return Err(DomainError::conflict("account already registered"));
        }
        self.accounts.push(account_id);
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
