//! Customer domain services
//!
//! `CustomerService` orchestrates the quote use cases: it prices requests with
//! the [`PremiumCalculator`], persists records through the [`CustomerStore`]
//! port, and maps records into [`InsuranceQuote`] results.

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{CustomerId, OperationMetadata, PortError};

use crate::customer::{Customer, CustomerDetails};
use crate::error::CustomerError;
use crate::ports::CustomerStore;
use crate::premium::PremiumCalculator;
use crate::quote::InsuranceQuote;

/// Service for customer quote operations
///
/// The service holds no mutable state of its own; every call goes straight
/// to the store, so a single instance is shared across request handlers.
/// Handlers scope a clone to their request with [`CustomerService::with_metadata`].
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    calculator: PremiumCalculator,
    metadata: Option<OperationMetadata>,
}

impl CustomerService {
    /// Creates a new customer service over the given store
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self {
            store,
            calculator: PremiumCalculator::new(),
            metadata: None,
        }
    }

    /// Returns a service whose store calls carry `metadata`
    pub fn with_metadata(&self, metadata: OperationMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..self.clone()
        }
    }

    /// Metadata passed along with every store call
    pub fn metadata(&self) -> Option<&OperationMetadata> {
        self.metadata.as_ref()
    }

    /// Returns the store backing this service
    pub fn store(&self) -> &Arc<dyn CustomerStore> {
        &self.store
    }

    /// Prices a quote request and records the customer
    ///
    /// The customer is persisted with its original vehicle value, while the
    /// returned quote carries the computed premium and no identifier.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::InvalidInput` if the calculator rejects the
    /// vehicle value or location; nothing is persisted in that case.
    #[instrument(skip(self, details), fields(location = %details.location))]
    pub async fn calculate_insurance(
        &self,
        details: CustomerDetails,
    ) -> Result<InsuranceQuote, CustomerError> {
        let premium = self
            .calculator
            .calculate(Some(details.vehicle_value), Some(&details.location))?;

        let quote = InsuranceQuote::premium(details.name.clone(), details.location.clone(), premium);

        let customer = self.store.create(Customer::from_details(details), self.metadata.clone()).await?;
        info!("Customer saved with name {}", customer.name);

        Ok(quote)
    }

    /// Lists every stored customer with its stored vehicle value
    ///
    /// An empty store yields an empty list rather than an error.
    pub async fn get_all_insurance(&self) -> Result<Vec<InsuranceQuote>, CustomerError> {
        let customers = self.store.find_all(self.metadata.clone()).await?;
        Ok(customers.into_iter().map(InsuranceQuote::from).collect())
    }

    /// Retrieves one customer with its stored vehicle value
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no customer has the identifier
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer_by_id(&self, id: CustomerId) -> Result<InsuranceQuote, CustomerError> {
        self.store
            .find_by_id(id, self.metadata.clone())
            .await?
            .map(InsuranceQuote::from)
            .ok_or_else(CustomerError::not_found)
    }

    /// Replaces every mutable field of an existing customer
    ///
    /// The premium is not recalculated and the calculator's input rules are
    /// not applied.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no customer has the identifier
    #[instrument(skip(self, details), fields(customer_id = %id))]
    pub async fn update(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> Result<InsuranceQuote, CustomerError> {
        let mut customer = self
            .store
            .find_by_id(id, self.metadata.clone())
            .await?
            .ok_or_else(CustomerError::not_found)?;

        customer.apply(details);

        let customer = self.store.save(customer, self.metadata.clone()).await.map_err(not_found_or_store)?;
        Ok(InsuranceQuote::from(customer))
    }

    /// Removes a customer
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no customer has the identifier
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete(&self, id: CustomerId) -> Result<(), CustomerError> {
        if self.store.delete_by_id(id, self.metadata.clone()).await? {
            Ok(())
        } else {
            Err(CustomerError::not_found())
        }
    }
}

// A record can disappear between the lookup and the save.
fn not_found_or_store(error: PortError) -> CustomerError {
    if error.is_not_found() {
        CustomerError::not_found()
    } else {
        CustomerError::Store(error)
    }
}
