//! Checking accounts domain module.
//!
//! This crate contains business rules for checking accounts, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//! monetary value objects, the account aggregate and its transaction records,
//! the factory centralizing identity/timestamp generation, the stateless
//! use-case service, and the async persistence port the service writes
//! through.

pub mod account;
pub mod factory;
pub mod money;
pub mod repository;
pub mod service;
pub mod transaction;

pub use account::{Account, OverdraftPolicy};
pub use factory::{AccountFactory, SystemAccountFactory};
pub use money::{Currency, Money, PositiveMoney};
pub use repository::{AccountRepository, RepositoryError};
pub use service::{AccountService, ServiceError};
pub use transaction::{Credit, Debit, Transaction, TransactionKind};
