//! Test Data Builders
//!
//! Builders for constructing customer input in tests, either as domain
//! values or as the JSON bodies the HTTP API accepts.

use chrono::NaiveDate;
use serde_json::{json, Value};

use domain_customer::CustomerDetails;

/// Builder for customer input data
#[derive(Debug, Clone)]
pub struct CustomerDetailsBuilder {
    name: String,
    document: String,
    birth_date: NaiveDate,
    location: String,
    vehicle_value: f64,
}

impl Default for CustomerDetailsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerDetailsBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Test Customer".to_string(),
            document: "12345678900".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            location: "SP".to_string(),
            vehicle_value: 50000.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_vehicle_value(mut self, vehicle_value: f64) -> Self {
        self.vehicle_value = vehicle_value;
        self
    }

    /// Builds the domain input
    pub fn build(self) -> CustomerDetails {
        CustomerDetails {
            name: self.name,
            document: self.document,
            birth_date: self.birth_date,
            location: self.location,
            vehicle_value: self.vehicle_value,
        }
    }

    /// Builds the bare customer JSON object, as sent to the update endpoint
    pub fn build_json(self) -> Value {
        customer_json(&self.build())
    }

    /// Builds the wrapped body accepted by the quote endpoint
    pub fn build_quote_request(self) -> Value {
        quote_request_json(&self.build())
    }
}

/// Serializes customer input with the wire field names
pub fn customer_json(details: &CustomerDetails) -> Value {
    json!({
        "name": details.name,
        "document": details.document,
        "birthDate": details.birth_date.format("%Y-%m-%d").to_string(),
        "location": details.location,
        "vehicle_value": details.vehicle_value,
    })
}

/// Wraps customer input in the `{"customer": ...}` envelope
pub fn quote_request_json(details: &CustomerDetails) -> Value {
    json!({ "customer": customer_json(details) })
}
