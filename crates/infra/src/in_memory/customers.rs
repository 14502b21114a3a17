use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use tracing::debug;

use crestbank_core::CustomerId;
use crestbank_customers::{Customer, CustomerRepository, RepositoryError};

/// In-memory customer store.
///
/// Intended for tests/dev. Snapshot-per-customer under one lock, with the
/// same add/update split as the account store.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored snapshot of one customer. Test accessor, not part of the port.
    pub fn customer(&self, id: CustomerId) -> Option<Customer> {
        self.inner.read().ok()?.get(&id).cloned()
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<CustomerId, Customer>>, RepositoryError>
    {
        self.inner
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let mut customers = self.write()?;
        let id = customer.id_typed();
        if customers.contains_key(&id) {
            return Err(RepositoryError::Conflict(id.to_string()));
        }

        customers.insert(id, customer.clone());
        debug!(customer_id = %id, "customer added");
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let mut customers = self.write()?;
        let id = customer.id_typed();
        if !customers.contains_key(&id) {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        customers.insert(id, customer.clone());
        debug!(
            customer_id = %id,
            accounts = customer.accounts().len(),
            "customer updated"
        );
        Ok(())
    }
}
