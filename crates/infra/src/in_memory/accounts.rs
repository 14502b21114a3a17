use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use tracing::debug;

use crestbank_accounts::{Account, AccountRepository, RepositoryError, Transaction};
use crestbank_core::{AccountId, Entity};

/// In-memory account store: one snapshot per account plus an append-only
/// transaction log.
///
/// Intended for tests/dev. Not optimized for performance. Both maps sit
/// behind a single lock, so each `add`/`update` is all-or-nothing:
/// validation runs first, then the snapshot and the transaction land under
/// the same write guard.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    inner: RwLock<AccountState>,
}

#[derive(Debug, Default)]
struct AccountState {
    accounts: HashMap<AccountId, Account>,
    transactions: Vec<Transaction>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored snapshot of one account. Test/bench accessor, not part of the
    /// port.
    pub fn account(&self, id: AccountId) -> Option<Account> {
        self.inner.read().ok()?.accounts.get(&id).cloned()
    }

    /// Transactions recorded for one account, in append order. Test/bench
    /// accessor, not part of the port.
    pub fn transactions_for(&self, id: AccountId) -> Vec<Transaction> {
        match self.inner.read() {
            Ok(state) => state
                .transactions
                .iter()
                .filter(|t| t.account_id() == id)
                .cloned()
                .collect(),
            Err(_) => vec![],
        }
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AccountState>, RepositoryError> {
        self.inner
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }

    fn ensure_coherent(
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError> {
        if transaction.account_id() != *account.id() {
            return Err(RepositoryError::Invalid(format!(
                "transaction {} references account {}, expected {}",
                transaction.transaction_id(),
                transaction.account_id(),
                account.id()
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError> {
        Self::ensure_coherent(account, transaction)?;

        let mut state = self.write()?;
        let id = account.id_typed();
        if state.accounts.contains_key(&id) {
            return Err(RepositoryError::Conflict(id.to_string()));
        }

        state.accounts.insert(id, account.clone());
        state.transactions.push(transaction.clone());
        debug!(
            account_id = %id,
            balance = account.balance().minor_units(),
            "account added"
        );
        Ok(())
    }

    async fn update(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<(), RepositoryError> {
        Self::ensure_coherent(account, transaction)?;

        let mut state = self.write()?;
        let id = account.id_typed();
        if !state.accounts.contains_key(&id) {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        state.accounts.insert(id, account.clone());
        state.transactions.push(transaction.clone());
        debug!(
            account_id = %id,
            balance = account.balance().minor_units(),
            "account updated"
        );
        Ok(())
    }
}
