use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crestbank_core::{AccountId, TransactionId};

use crate::money::PositiveMoney;

/// Kind of balance movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// Immutable record of one balance increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub amount: PositiveMoney,
    pub occurred_at: DateTime<Utc>,
}

/// Immutable record of one balance decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debit {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub amount: PositiveMoney,
    pub occurred_at: DateTime<Utc>,
}

/// Either transaction record, as carried across the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Credit(Credit),
    Debit(Debit),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Credit(_) => TransactionKind::Credit,
            Transaction::Debit(_) => TransactionKind::Debit,
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Transaction::Credit(c) => c.transaction_id,
            Transaction::Debit(d) => d.transaction_id,
        }
    }

    pub fn account_id(&self) -> AccountId {
        match self {
            Transaction::Credit(c) => c.account_id,
            Transaction::Debit(d) => d.account_id,
        }
    }

    pub fn amount(&self) -> PositiveMoney {
        match self {
            Transaction::Credit(c) => c.amount,
            Transaction::Debit(d) => d.amount,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Transaction::Credit(c) => c.occurred_at,
            Transaction::Debit(d) => d.occurred_at,
        }
    }

    /// The amount with the sign of its effect on the balance.
    pub fn signed_minor_units(&self) -> i64 {
        match self {
            Transaction::Credit(c) => c.amount.minor_units(),
            Transaction::Debit(d) => -d.amount.minor_units(),
        }
    }
}

impl From<Credit> for Transaction {
    fn from(credit: Credit) -> Self {
        Transaction::Credit(credit)
    }
}

impl From<Debit> for Transaction {
    fn from(debit: Debit) -> Self {
        Transaction::Debit(debit)
    }
}
