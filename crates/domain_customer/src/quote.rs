//! Quote results returned by the customer service
//!
//! The public contract reports a single amount per quote. On the create path
//! that amount is the computed premium; on every read or update path it is the
//! stored vehicle value. `QuoteAmount` keeps the two meanings apart inside the
//! domain, and the HTTP layer flattens both into one field.

use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

use crate::customer::Customer;

/// The amount carried by a quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum QuoteAmount {
    /// Premium computed for a new quote request
    Premium(f64),
    /// Vehicle value as stored on the customer record
    VehicleValue(f64),
}

impl QuoteAmount {
    /// Returns the raw amount regardless of its meaning
    pub fn value(&self) -> f64 {
        match self {
            QuoteAmount::Premium(amount) | QuoteAmount::VehicleValue(amount) => *amount,
        }
    }

    /// Returns true if the amount is a computed premium
    pub fn is_premium(&self) -> bool {
        matches!(self, QuoteAmount::Premium(_))
    }
}

/// Result of a customer service operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceQuote {
    /// Absent on freshly calculated quotes, even though the record was stored
    pub id: Option<CustomerId>,
    pub name: String,
    pub location: String,
    pub amount: QuoteAmount,
}

impl InsuranceQuote {
    /// Builds a quote for a newly calculated premium
    pub fn premium(name: impl Into<String>, location: impl Into<String>, premium: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            amount: QuoteAmount::Premium(premium),
        }
    }
}

impl From<&Customer> for InsuranceQuote {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            location: customer.location.clone(),
            amount: QuoteAmount::VehicleValue(customer.vehicle_value),
        }
    }
}

impl From<Customer> for InsuranceQuote {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            location: customer.location,
            amount: QuoteAmount::VehicleValue(customer.vehicle_value),
        }
    }
}
