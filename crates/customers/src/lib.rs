//! Customers domain module.
//!
//! This crate contains business rules for bank customers, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage): validated
//! identity value objects, the customer entity with its account-ownership
//! record, and the async persistence port.

pub mod customer;
pub mod repository;
pub mod value_objects;

pub use customer::Customer;
pub use repository::{CustomerRepository, RepositoryError};
pub use value_objects::{Name, Ssn};
