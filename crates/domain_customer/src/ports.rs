//! Customer Store Port
//!
//! This module defines the persistence port for customer records, enabling
//! swappable implementations:
//!
//! - **PostgreSQL Adapter**: `infra_db::PostgresCustomerStore`
//! - **In-Memory Adapter**: [`memory::InMemoryCustomerStore`], used by tests
//!   and by the server when no database is configured
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_customer::{CustomerStore, InMemoryCustomerStore};
//!
//! let store: Arc<dyn CustomerStore> = Arc::new(InMemoryCustomerStore::new());
//! let saved = store.create(customer, None).await?;
//! assert!(saved.id.is_some());
//! ```

use async_trait::async_trait;

use core_kernel::{CustomerId, DomainPort, HealthCheckable, OperationMetadata, PortError};

use crate::customer::Customer;

/// Persistence port for customer records
///
/// Implementations must assign unique, monotonically increasing identifiers
/// and provide their own atomicity for single-record operations.
#[async_trait]
pub trait CustomerStore: DomainPort + HealthCheckable {
    /// Persists a new record and returns it with its assigned identifier
    ///
    /// Any identifier already present on `customer` is ignored.
    async fn create(
        &self,
        customer: Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError>;

    /// Retrieves a record by identifier
    async fn find_by_id(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Customer>, PortError>;

    /// Retrieves every record in ascending identifier order
    async fn find_all(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Customer>, PortError>;

    /// Overwrites an existing record
    ///
    /// # Errors
    ///
    /// `PortError::Validation` if the record carries no identifier,
    /// `PortError::NotFound` if no record has that identifier.
    async fn save(
        &self,
        customer: Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError>;

    /// Removes a record, returning whether one existed
    async fn delete_by_id(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;
}

/// In-memory adapter for the customer store
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use chrono::Utc;
    use tokio::sync::RwLock;
    use tracing::debug;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    #[derive(Debug)]
    struct State {
        records: BTreeMap<CustomerId, Customer>,
        next_id: CustomerId,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                records: BTreeMap::new(),
                next_id: CustomerId::new(1),
            }
        }
    }

    /// Customer store backed by a `BTreeMap`
    ///
    /// Identifiers start at 1 and are never reused, even after deletion.
    /// Clones share the same underlying state.
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryCustomerStore {
        state: Arc<RwLock<State>>,
    }

    impl InMemoryCustomerStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the number of stored records
        pub async fn len(&self) -> usize {
            self.state.read().await.records.len()
        }

        /// Returns true if no records are stored
        pub async fn is_empty(&self) -> bool {
            self.state.read().await.records.is_empty()
        }
    }

    impl DomainPort for InMemoryCustomerStore {}

    #[async_trait]
    impl HealthCheckable for InMemoryCustomerStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "in-memory-customer-store".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl CustomerStore for InMemoryCustomerStore {
        async fn create(
            &self,
            customer: Customer,
            metadata: Option<OperationMetadata>,
        ) -> Result<Customer, PortError> {
            let mut state = self.state.write().await;
            let id = state.next_id;
            state.next_id = id.next();

            let customer = customer.with_id(id);
            state.records.insert(id, customer.clone());
            debug!(
                customer_id = %id,
                correlation_id = ?metadata.and_then(|m| m.correlation_id),
                "Customer inserted"
            );
            Ok(customer)
        }

        async fn find_by_id(
            &self,
            id: CustomerId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Option<Customer>, PortError> {
            Ok(self.state.read().await.records.get(&id).cloned())
        }

        async fn find_all(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Customer>, PortError> {
            Ok(self.state.read().await.records.values().cloned().collect())
        }

        async fn save(
            &self,
            customer: Customer,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Customer, PortError> {
            let id = customer
                .id
                .ok_or_else(|| PortError::validation_field("Customer has no identifier", "id"))?;

            let mut state = self.state.write().await;
            let slot = state
                .records
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Customer", id))?;
            *slot = customer.clone();
            Ok(customer)
        }

        async fn delete_by_id(
            &self,
            id: CustomerId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<bool, PortError> {
            Ok(self.state.write().await.records.remove(&id).is_some())
        }
    }
}
