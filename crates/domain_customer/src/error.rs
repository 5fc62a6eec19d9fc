//! Customer domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Message used whenever an identifier does not resolve to a stored customer
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Input rejected by the premium calculator or field validation
    #[error("{0}")]
    InvalidInput(String),

    /// No customer matches the requested identifier
    #[error("{0}")]
    NotFound(String),

    /// The persistence adapter failed
    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl CustomerError {
    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CustomerError::InvalidInput(message.into())
    }

    /// Creates the standard customer-not-found error
    pub fn not_found() -> Self {
        CustomerError::NotFound(CUSTOMER_NOT_FOUND.to_string())
    }

    /// Returns true if the error maps to a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, CustomerError::NotFound(_))
    }

    /// Returns true if the error was caused by caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CustomerError::InvalidInput(_))
    }
}
