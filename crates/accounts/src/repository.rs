use std::sync::Arc;

use thiserror::Error;

use crate::account::Account;
use crate::transaction::Transaction;

/// Errors surfaced by account persistence adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// `add` was called for an account that is already stored.
    #[error("account already exists: {0}")]
    Conflict(String),

    /// `update` was called for an account that was never added.
    #[error("account not found: {0}")]
    NotFound(String),

    /// The account/transaction pair is incoherent (e.g. the transaction
    /// references a different account).
    #[error("invalid write: {0}")]
    Invalid(String),

    /// The storage backend itself failed (IO, poisoned lock, ...).
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Persistence port for accounts.
///
/// Both operations persist the account snapshot together with exactly one
/// transaction record, all or nothing: if either write fails, the whole call
/// fails and no partial commit is visible to the caller. Callers must not
/// treat a use case as complete until the returned future resolves.
///
/// Durability, locking, and cancellation semantics belong to the
/// implementation; the domain core neither retries nor translates failures.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a newly opened account and its opening transaction.
    async fn add(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError>;

    /// Persist a mutated account and the transaction that mutated it.
    async fn update(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError>;
}

#[async_trait::async_trait]
impl<R> AccountRepository for Arc<R>
where
    R: AccountRepository + ?Sized,
{
    async fn add(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError> {
        (**self).add(account, transaction).await
    }

    async fn update(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError> {
        (**self).update(account, transaction).await
    }
}
