//! In-memory persistence adapters.
//!
//! Reference implementations of the account and customer ports backed by
//! process-local maps. They honor the same all-or-nothing contract the ports
//! promise, which makes them good enough for tests, benchmarks, and local
//! development.

pub mod accounts;
pub mod customers;

pub use accounts::InMemoryAccountRepository;
pub use customers::InMemoryCustomerRepository;
