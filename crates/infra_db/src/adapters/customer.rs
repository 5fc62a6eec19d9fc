//! PostgreSQL Customer Adapter
//!
//! This module provides the database adapter for the customer domain,
//! implementing the `CustomerStore` port using the `CustomerRepository`.
//!
//! The adapter:
//!
//! - Translates domain records into repository rows and back
//! - Converts `DatabaseError` into `PortError`
//! - Reports database connectivity through `HealthCheckable`

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, CustomerId, DomainPort, HealthCheckResult, HealthCheckable,
    OperationMetadata, PortError,
};
use domain_customer::{Customer, CustomerStore};

use crate::repositories::customer::{CustomerRepository, CustomerRow, NewCustomer};

const ADAPTER_ID: &str = "postgres-customer-store";

/// PostgreSQL-backed implementation of the `CustomerStore` port
///
/// Identifiers come from the `customers.id` identity column, which is
/// monotonically increasing and never reused.
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    repository: CustomerRepository,
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a new PostgreSQL customer store
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &CustomerRepository {
        &self.repository
    }
}

impl DomainPort for PostgresCustomerStore {}

fn correlation_id(metadata: &Option<OperationMetadata>) -> Option<&str> {
    metadata.as_ref().and_then(|m| m.correlation_id.as_deref())
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: Some(CustomerId::new(row.id)),
            name: row.name,
            document: row.document,
            birth_date: row.birth_date,
            location: row.location,
            vehicle_value: row.vehicle_value,
        }
    }
}

impl From<Customer> for NewCustomer {
    fn from(customer: Customer) -> Self {
        NewCustomer {
            name: customer.name,
            document: customer.document,
            birth_date: customer.birth_date,
            location: customer.location,
            vehicle_value: customer.vehicle_value,
        }
    }
}

#[async_trait]
impl HealthCheckable for PostgresCustomerStore {
    /// Performs a `SELECT 1` to verify the pool is operational
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    #[instrument(skip(self, customer, metadata), fields(correlation_id = ?correlation_id(&metadata)))]
    async fn create(
        &self,
        customer: Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError> {
        debug!("Inserting customer");
        let row = self.repository.insert(&NewCustomer::from(customer)).await?;
        Ok(row.into())
    }

    #[instrument(skip(self, metadata), fields(customer_id = %id, correlation_id = ?correlation_id(&metadata)))]
    async fn find_by_id(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Customer>, PortError> {
        let row = self.repository.find_by_id(id.value()).await?;
        Ok(row.map(Customer::from))
    }

    #[instrument(skip(self, metadata), fields(correlation_id = ?correlation_id(&metadata)))]
    async fn find_all(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Customer>, PortError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    #[instrument(skip(self, customer, metadata), fields(correlation_id = ?correlation_id(&metadata)))]
    async fn save(
        &self,
        customer: Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError> {
        let id = customer
            .id
            .ok_or_else(|| PortError::validation_field("Customer has no identifier", "id"))?;

        let row = CustomerRow {
            id: id.value(),
            name: customer.name,
            document: customer.document,
            birth_date: customer.birth_date,
            location: customer.location,
            vehicle_value: customer.vehicle_value,
        };

        let updated = self.repository.update(&row).await?;
        Ok(updated.into())
    }

    #[instrument(skip(self, metadata), fields(customer_id = %id, correlation_id = ?correlation_id(&metadata)))]
    async fn delete_by_id(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        let removed = self.repository.delete(id.value()).await?;
        Ok(removed > 0)
    }
}
