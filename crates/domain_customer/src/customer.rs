//! Customer record
//!
//! A customer is created whenever a quote is requested and afterwards only
//! changes through a full replace of its mutable fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// The mutable fields of a customer, as submitted by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    /// Identification number, stored verbatim
    pub document: String,
    /// Captured for the customer profile; not used for pricing
    pub birth_date: NaiveDate,
    /// Region code; "SP" earns the preferential low-tier rate
    pub location: String,
    pub vehicle_value: f64,
}

/// Persisted customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned by the store on first persistence
    pub id: Option<CustomerId>,
    pub name: String,
    pub document: String,
    pub birth_date: NaiveDate,
    pub location: String,
    /// The customer's vehicle value, never the computed premium
    pub vehicle_value: f64,
}

impl Customer {
    /// Builds a record that has not been persisted yet
    pub fn from_details(details: CustomerDetails) -> Self {
        Self {
            id: None,
            name: details.name,
            document: details.document,
            birth_date: details.birth_date,
            location: details.location,
            vehicle_value: details.vehicle_value,
        }
    }

    /// Replaces every mutable field, keeping the identifier
    pub fn apply(&mut self, details: CustomerDetails) {
        self.name = details.name;
        self.document = details.document;
        self.birth_date = details.birth_date;
        self.location = details.location;
        self.vehicle_value = details.vehicle_value;
    }

    /// Returns a copy carrying the given identifier
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true once the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
