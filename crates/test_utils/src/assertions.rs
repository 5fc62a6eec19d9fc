//! Custom Test Assertions
//!
//! Assertion helpers for quotes, both as domain values and as JSON bodies.

use serde_json::Value;

use domain_customer::{InsuranceQuote, QuoteAmount};

/// Asserts that a quote carries the expected premium
///
/// Premiums are compared exactly: the tier rates produce the documented
/// values without rounding.
pub fn assert_premium(quote: &InsuranceQuote, expected: f64) {
    match quote.amount {
        QuoteAmount::Premium(actual) => assert_eq!(
            actual, expected,
            "Premium mismatch for {}: expected {}, got {}",
            quote.name, expected, actual
        ),
        QuoteAmount::VehicleValue(value) => {
            panic!("Expected a premium quote, got vehicle value {}", value)
        }
    }
}

/// Asserts that a quote echoes a stored vehicle value
pub fn assert_vehicle_value(quote: &InsuranceQuote, expected: f64) {
    match quote.amount {
        QuoteAmount::VehicleValue(actual) => assert_eq!(actual, expected),
        QuoteAmount::Premium(premium) => {
            panic!("Expected a stored vehicle value, got premium {}", premium)
        }
    }
}

/// Asserts the shape of a quote JSON body
pub fn assert_quote_json(body: &Value, name: &str, location: &str, amount: f64) {
    assert_eq!(body["name"], name, "unexpected name in {}", body);
    assert_eq!(body["location"], location, "unexpected location in {}", body);
    assert_eq!(
        body["vehicle_value"].as_f64(),
        Some(amount),
        "unexpected vehicle_value in {}",
        body
    );
}

/// Asserts the uniform error body returned by the API
pub fn assert_error_json(body: &Value, status: u16, message: &str, path: &str) {
    assert_eq!(body["status"], status, "unexpected status in {}", body);
    assert_eq!(body["message"], message, "unexpected message in {}", body);
    assert_eq!(body["path"], path, "unexpected path in {}", body);
    assert!(body["error"].is_string(), "missing error in {}", body);
}
