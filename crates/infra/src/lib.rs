//! Infrastructure layer: persistence adapters behind the domain ports.

pub mod in_memory;

pub use in_memory::{InMemoryAccountRepository, InMemoryCustomerRepository};
