use std::sync::Arc;

use thiserror::Error;

use crate::customer::Customer;

/// Errors surfaced by customer persistence adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// `add` was called for a customer that is already stored.
    #[error("customer already exists: {0}")]
    Conflict(String),

    /// `update` was called for a customer that was never added.
    #[error("customer not found: {0}")]
    NotFound(String),

    /// The storage backend itself failed (IO, poisoned lock, ...).
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Persistence port for customers: same all-or-nothing add/update contract
/// as the account port.
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a newly created customer.
    async fn add(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Persist a customer after a state change (e.g. account registration).
    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError>;
}

#[async_trait::async_trait]
impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    async fn add(&self, customer: &Customer) -> Result<(), RepositoryError> {
        (**self).add(customer).await
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        (**self).update(customer).await
    }
}
