use thiserror::Error;

use crestbank_core::{CustomerId, DomainError};

use crate::account::Account;
use crate::factory::AccountFactory;
use crate::money::PositiveMoney;
use crate::repository::{AccountRepository, RepositoryError};
use crate::transaction::{Credit, Debit, Transaction};

/// Failure of an account use case.
///
/// Domain rejections and persistence failures stay distinguishable; neither
/// is translated, retried, or recovered from here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Stateless orchestrator for the account use cases.
///
/// Each call is one self-contained use case: factory, then exactly one
/// aggregate mutation, then exactly one awaited repository call. The result
/// must not be treated as durable before that call resolves.
#[derive(Debug, Clone)]
pub struct AccountService<F, R> {
    factory: F,
    repository: R,
}

impl<F, R> AccountService<F, R>
where
    F: AccountFactory,
    R: AccountRepository,
{
    pub fn new(factory: F, repository: R) -> Self {
        Self {
            factory,
            repository,
        }
    }

    /// Open a checking account with a mandatory initial deposit.
    ///
    /// The fresh account and its opening credit are persisted together via
    /// `add`; the account is returned once the write resolves. A zero or
    /// unspecified opening balance is unrepresentable, since only
    /// [`PositiveMoney`] is accepted.
    pub async fn open_checking_account(
        &self,
        customer_id: CustomerId,
        initial_deposit: PositiveMoney,
    ) -> Result<Account, ServiceError> {
        let mut account = self.factory.new_account(customer_id);
        let credit = account.deposit(&self.factory, initial_deposit)?;
        self.repository
            .add(&account, &Transaction::Credit(credit))
            .await?;
        Ok(account)
    }

    /// Deposit into an existing account; persists via `update` and returns
    /// the credit.
    pub async fn deposit(
        &self,
        account: &mut Account,
        amount: PositiveMoney,
    ) -> Result<Credit, ServiceError> {
        let credit = account.deposit(&self.factory, amount)?;
        self.repository
            .update(account, &Transaction::Credit(credit.clone()))
            .await?;
        Ok(credit)
    }

    /// Withdraw from an existing account; persists via `update` and returns
    /// the debit.
    pub async fn withdraw(
        &self,
        account: &mut Account,
        amount: PositiveMoney,
    ) -> Result<Debit, ServiceError> {
        let debit = account.withdraw(&self.factory, amount)?;
        self.repository
            .update(account, &Transaction::Debit(debit.clone()))
            .await?;
        Ok(debit)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::account::OverdraftPolicy;
    use crate::factory::SystemAccountFactory;
    use crate::money::Currency;
    use crate::transaction::TransactionKind;

    /// Records every port call so tests can assert call counts and payloads.
    #[derive(Debug, Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<RecordedCall>>,
    }

    #[derive(Debug, Clone)]
    struct RecordedCall {
        op: &'static str,
        account: Account,
        transaction: Transaction,
    }

    impl RecordingRepository {
        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, op: &'static str, account: &Account, transaction: &Transaction) {
            self.calls.lock().unwrap().push(RecordedCall {
                op,
                account: account.clone(),
                transaction: transaction.clone(),
            });
        }
    }

    #[async_trait::async_trait]
    impl AccountRepository for RecordingRepository {
        async fn add(
            &self,
            account: &Account,
            transaction: &Transaction,
        ) -> Result<(), RepositoryError> {
            self.record("add", account, transaction);
            Ok(())
        }

        async fn update(
            &self,
            account: &Account,
            transaction: &Transaction,
        ) -> Result<(), RepositoryError> {
            self.record("update", account, transaction);
            Ok(())
        }
    }

    /// Fails every call, for exercising the persistence error path.
    #[derive(Debug, Default)]
    struct FailingRepository;

    #[async_trait::async_trait]
    impl AccountRepository for FailingRepository {
        async fn add(&self, _: &Account, _: &Transaction) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("injected failure".to_string()))
        }

        async fn update(&self, _: &Account, _: &Transaction) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("injected failure".to_string()))
        }
    }

    fn test_customer_id() -> CustomerId {
        CustomerId::new()
    }

    fn usd(minor: i64) -> PositiveMoney {
        PositiveMoney::from_minor(minor, Currency::Usd).unwrap()
    }

    fn service() -> AccountService<SystemAccountFactory, RecordingRepository> {
        AccountService::new(
            SystemAccountFactory::new(Currency::Usd),
            RecordingRepository::default(),
        )
    }

    #[tokio::test]
    async fn open_checking_account_persists_account_with_opening_credit() {
        let service = service();
        let customer_id = test_customer_id();

        let account = service
            .open_checking_account(customer_id, usd(100))
            .await
            .unwrap();

        assert_eq!(account.balance().minor_units(), 100);
        assert_eq!(account.customer_id(), customer_id);

        let calls = service.repository.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "add");
        assert_eq!(calls[0].account, account);
        assert_eq!(calls[0].transaction.kind(), TransactionKind::Credit);
        assert_eq!(calls[0].transaction.amount(), usd(100));
        assert_eq!(calls[0].transaction.account_id(), account.id_typed());
    }

    #[tokio::test]
    async fn deposit_persists_one_update_with_the_credit() {
        let service = service();
        let mut account = service.factory.new_account(test_customer_id());

        let credit = service.deposit(&mut account, usd(50)).await.unwrap();

        assert_eq!(account.balance().minor_units(), 50);
        assert_eq!(credit.amount, usd(50));

        let calls = service.repository.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "update");
        assert_eq!(calls[0].account, account);
        assert_eq!(calls[0].transaction, Transaction::Credit(credit));
    }

    #[tokio::test]
    async fn withdraw_persists_one_update_with_the_debit() {
        let service = service();
        let mut account = service.factory.new_account(test_customer_id());
        service.deposit(&mut account, usd(150)).await.unwrap();

        let debit = service.withdraw(&mut account, usd(30)).await.unwrap();

        assert_eq!(account.balance().minor_units(), 120);
        assert_eq!(debit.amount, usd(30));

        let calls = service.repository.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].op, "update");
        assert_eq!(calls[1].account, account);
        assert_eq!(calls[1].transaction, Transaction::Debit(debit));
    }

    #[tokio::test]
    async fn rejected_withdrawal_never_reaches_the_repository() {
        let service = service();
        let mut account = service.factory.new_account(test_customer_id());
        service.deposit(&mut account, usd(50)).await.unwrap();

        let err = service.withdraw(&mut account, usd(100)).await.unwrap_err();
        match err {
            ServiceError::Domain(DomainError::InsufficientFunds { .. }) => {}
            other => panic!("Expected InsufficientFunds, got {other:?}"),
        }

        assert_eq!(account.balance().minor_units(), 50);
        // Only the earlier deposit reached the port.
        assert_eq!(service.repository.calls().len(), 1);
    }

    #[tokio::test]
    async fn permissive_service_lets_the_balance_go_negative() {
        let service = AccountService::new(
            SystemAccountFactory::new(Currency::Usd)
                .with_overdraft_policy(OverdraftPolicy::Allow),
            RecordingRepository::default(),
        );
        let mut account = service.factory.new_account(test_customer_id());
        service.deposit(&mut account, usd(50)).await.unwrap();

        service.withdraw(&mut account, usd(100)).await.unwrap();

        assert_eq!(account.balance().minor_units(), -50);
        assert!(account.is_overdrawn());
        assert_eq!(service.repository.calls().len(), 2);
    }

    #[tokio::test]
    async fn repository_failure_propagates_unchanged() {
        let service = AccountService::new(
            SystemAccountFactory::new(Currency::Usd),
            FailingRepository,
        );

        let err = service
            .open_checking_account(test_customer_id(), usd(100))
            .await
            .unwrap_err();
        match err {
            ServiceError::Repository(RepositoryError::Storage(msg)) => {
                assert_eq!(msg, "injected failure");
            }
            other => panic!("Expected Storage failure, got {other:?}"),
        }
    }
}
