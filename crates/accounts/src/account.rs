use serde::{Deserialize, Serialize};

use crestbank_core::{AccountId, CustomerId, DomainError, DomainResult, Entity};

use crate::factory::AccountFactory;
use crate::money::{Currency, Money, PositiveMoney};
use crate::transaction::{Credit, Debit};

/// Whether a withdrawal may push the balance below zero.
///
/// `Deny` fails such a withdrawal with insufficient funds and leaves the
/// balance untouched; `Allow` lets the balance go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverdraftPolicy {
    Deny,
    Allow,
}

impl Default for OverdraftPolicy {
    fn default() -> Self {
        Self::Deny
    }
}

/// Aggregate root: a customer's checking account.
///
/// Holds identity, the owning customer, and the running balance. Mutated only
/// through [`deposit`](Account::deposit)/[`withdraw`](Account::withdraw),
/// each of which adjusts the balance and mints the matching transaction
/// record through the factory. The aggregate produces transaction records
/// but does not retain them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    customer_id: CustomerId,
    balance: Money,
    overdraft_policy: OverdraftPolicy,
}

impl Account {
    /// Open an account at zero balance.
    ///
    /// Prefer [`AccountFactory::new_account`], which centralizes identity
    /// generation and the currency/policy defaults.
    pub fn open(
        id: AccountId,
        customer_id: CustomerId,
        currency: Currency,
        overdraft_policy: OverdraftPolicy,
    ) -> Self {
        Self {
            id,
            customer_id,
            balance: Money::zero(currency),
            overdraft_policy,
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn overdraft_policy(&self) -> OverdraftPolicy {
        self.overdraft_policy
    }

    /// Invariant helper: whether the balance is below zero.
    ///
    /// Only `OverdraftPolicy::Allow` accounts can ever be overdrawn.
    pub fn is_overdrawn(&self) -> bool {
        self.balance.minor_units() < 0
    }

    /// Increase the balance and mint the matching credit record.
    ///
    /// Fails only on a currency mismatch between `amount` and the balance;
    /// the balance is untouched in that case.
    pub fn deposit<F: AccountFactory>(
        &mut self,
        factory: &F,
        amount: PositiveMoney,
    ) -> DomainResult<Credit> {
        let new_balance = self.balance.checked_add(&amount.money())?;
        self.balance = new_balance;
        Ok(factory.new_credit(self, amount))
    }

    /// Decrease the balance and mint the matching debit record.
    ///
    /// Under `OverdraftPolicy::Deny`, a withdrawal exceeding the balance
    /// fails with insufficient funds; no partial state is observable on any
    /// failure path.
    pub fn withdraw<F: AccountFactory>(
        &mut self,
        factory: &F,
        amount: PositiveMoney,
    ) -> DomainResult<Debit> {
        let new_balance = self.balance.checked_sub(&amount.money())?;
        if self.overdraft_policy == OverdraftPolicy::Deny && new_balance.minor_units() < 0 {
            return Err(DomainError::InsufficientFunds {
                requested: amount.minor_units(),
                available: self.balance.minor_units(),
            });
        }
        self.balance = new_balance;
        Ok(factory.new_debit(self, amount))
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SystemAccountFactory;
    use proptest::prelude::*;

    fn test_customer_id() -> CustomerId {
        CustomerId::new()
    }

    fn test_factory() -> SystemAccountFactory {
        SystemAccountFactory::new(Currency::Usd)
    }

    fn permissive_factory() -> SystemAccountFactory {
        SystemAccountFactory::new(Currency::Usd).with_overdraft_policy(OverdraftPolicy::Allow)
    }

    fn usd(minor: i64) -> PositiveMoney {
        PositiveMoney::from_minor(minor, Currency::Usd).unwrap()
    }

    #[test]
    fn opened_account_starts_at_zero_balance() {
        let factory = test_factory();
        let customer_id = test_customer_id();
        let account = factory.new_account(customer_id);

        assert_eq!(account.balance(), Money::zero(Currency::Usd));
        assert_eq!(account.customer_id(), customer_id);
        assert_eq!(account.overdraft_policy(), OverdraftPolicy::Deny);
        assert!(!account.is_overdrawn());
    }

    #[test]
    fn deposit_increases_balance_and_mints_credit() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());

        let credit = account.deposit(&factory, usd(100)).unwrap();

        assert_eq!(account.balance().minor_units(), 100);
        assert_eq!(credit.account_id, account.id_typed());
        assert_eq!(credit.amount, usd(100));
    }

    #[test]
    fn deposits_accumulate() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());

        account.deposit(&factory, usd(100)).unwrap();
        let credit = account.deposit(&factory, usd(50)).unwrap();

        assert_eq!(account.balance().minor_units(), 150);
        assert_eq!(credit.amount, usd(50));
    }

    #[test]
    fn withdraw_decreases_balance_and_mints_debit() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());
        account.deposit(&factory, usd(150)).unwrap();

        let debit = account.withdraw(&factory, usd(30)).unwrap();

        assert_eq!(account.balance().minor_units(), 120);
        assert_eq!(debit.account_id, account.id_typed());
        assert_eq!(debit.amount, usd(30));
    }

    #[test]
    fn withdraw_beyond_balance_is_denied_by_default() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());
        account.deposit(&factory, usd(50)).unwrap();

        let err = account.withdraw(&factory, usd(100)).unwrap_err();
        match err {
            DomainError::InsufficientFunds {
                requested,
                available,
            } => {
                assert_eq!(requested, 100);
                assert_eq!(available, 50);
            }
            other => panic!("Expected InsufficientFunds, got {other:?}"),
        }

        // Denied withdrawal leaves the balance untouched.
        assert_eq!(account.balance().minor_units(), 50);
    }

    #[test]
    fn permissive_policy_allows_negative_balance() {
        let factory = permissive_factory();
        let mut account = factory.new_account(test_customer_id());
        account.deposit(&factory, usd(50)).unwrap();

        let debit = account.withdraw(&factory, usd(100)).unwrap();

        assert_eq!(debit.amount, usd(100));
        assert_eq!(account.balance().minor_units(), -50);
        assert!(account.is_overdrawn());
    }

    #[test]
    fn deposit_rejects_foreign_currency() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());
        account.deposit(&factory, usd(100)).unwrap();

        let eur = PositiveMoney::from_minor(10, Currency::Eur).unwrap();
        let err = account.deposit(&factory, eur).unwrap_err();
        match err {
            DomainError::CurrencyMismatch { .. } => {}
            other => panic!("Expected CurrencyMismatch, got {other:?}"),
        }
        assert_eq!(account.balance().minor_units(), 100);
    }

    #[test]
    fn withdraw_rejects_foreign_currency() {
        let factory = permissive_factory();
        let mut account = factory.new_account(test_customer_id());
        account.deposit(&factory, usd(100)).unwrap();

        let jpy = PositiveMoney::from_minor(10, Currency::Jpy).unwrap();
        let err = account.withdraw(&factory, jpy).unwrap_err();
        match err {
            DomainError::CurrencyMismatch { .. } => {}
            other => panic!("Expected CurrencyMismatch, got {other:?}"),
        }
        assert_eq!(account.balance().minor_units(), 100);
    }

    #[test]
    fn minted_records_carry_distinct_transaction_ids() {
        let factory = test_factory();
        let mut account = factory.new_account(test_customer_id());

        let first = account.deposit(&factory, usd(10)).unwrap();
        let second = account.deposit(&factory, usd(10)).unwrap();

        assert_ne!(first.transaction_id, second.transaction_id);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: depositing then withdrawing the same amount restores the
        /// balance.
        #[test]
        fn deposit_then_withdraw_restores_balance(minor in 1i64..1_000_000i64) {
            let factory = test_factory();
            let mut account = factory.new_account(test_customer_id());

            account.deposit(&factory, usd(minor)).unwrap();
            account.withdraw(&factory, usd(minor)).unwrap();

            prop_assert_eq!(account.balance().minor_units(), 0);
        }

        /// Property: an account under the deny policy never goes negative,
        /// whatever the withdrawal request.
        #[test]
        fn denied_accounts_never_overdraw(
            deposited in 1i64..1_000_000i64,
            requested in 1i64..1_000_000i64
        ) {
            let factory = test_factory();
            let mut account = factory.new_account(test_customer_id());
            account.deposit(&factory, usd(deposited)).unwrap();

            let result = account.withdraw(&factory, usd(requested));
            if requested <= deposited {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
            prop_assert!(account.balance().minor_units() >= 0);
        }
    }
}
