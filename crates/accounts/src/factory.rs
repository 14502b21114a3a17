use std::sync::Arc;

use chrono::Utc;

use crestbank_core::{AccountId, CustomerId, TransactionId};

use crate::account::{Account, OverdraftPolicy};
use crate::money::{Currency, PositiveMoney};
use crate::transaction::{Credit, Debit};

/// Capability set for constructing accounts and transaction records.
///
/// Identity and timestamp generation are centralized here so the aggregate
/// stays free of infrastructure concerns. `new_credit`/`new_debit` are called
/// by the aggregate during deposit/withdraw, never independently, which keeps
/// record sequencing in one place.
pub trait AccountFactory: Send + Sync {
    /// A fresh account for the customer: new identity, zero balance.
    fn new_account(&self, customer_id: CustomerId) -> Account;

    /// Mint the credit record for a deposit on `account`.
    fn new_credit(&self, account: &Account, amount: PositiveMoney) -> Credit;

    /// Mint the debit record for a withdrawal on `account`.
    fn new_debit(&self, account: &Account, amount: PositiveMoney) -> Debit;
}

impl<F> AccountFactory for Arc<F>
where
    F: AccountFactory + ?Sized,
{
    fn new_account(&self, customer_id: CustomerId) -> Account {
        (**self).new_account(customer_id)
    }

    fn new_credit(&self, account: &Account, amount: PositiveMoney) -> Credit {
        (**self).new_credit(account, amount)
    }

    fn new_debit(&self, account: &Account, amount: PositiveMoney) -> Debit {
        (**self).new_debit(account, amount)
    }
}

/// Production factory: UUIDv7 identities, `Utc::now()` timestamps, and the
/// configured currency and overdraft policy for the accounts it opens.
#[derive(Debug, Clone)]
pub struct SystemAccountFactory {
    currency: Currency,
    overdraft_policy: OverdraftPolicy,
}

impl SystemAccountFactory {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            overdraft_policy: OverdraftPolicy::default(),
        }
    }

    /// Override the overdraft policy applied to accounts this factory opens.
    pub fn with_overdraft_policy(mut self, policy: OverdraftPolicy) -> Self {
        self.overdraft_policy = policy;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn overdraft_policy(&self) -> OverdraftPolicy {
        self.overdraft_policy
    }
}

impl AccountFactory for SystemAccountFactory {
    fn new_account(&self, customer_id: CustomerId) -> Account {
        Account::open(
            AccountId::new(),
            customer_id,
            self.currency,
            self.overdraft_policy,
        )
    }

    fn new_credit(&self, account: &Account, amount: PositiveMoney) -> Credit {
        Credit {
            transaction_id: TransactionId::new(),
            account_id: account.id_typed(),
            amount,
            occurred_at: Utc::now(),
        }
    }

    fn new_debit(&self, account: &Account, amount: PositiveMoney) -> Debit {
        Debit {
            transaction_id: TransactionId::new(),
            account_id: account.id_typed(),
            amount,
            occurred_at: Utc::now(),
        }
    }
}
