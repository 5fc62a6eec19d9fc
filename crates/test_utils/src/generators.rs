//! Property-Based Test Generators
//!
//! Proptest strategies for customer input.

use chrono::NaiveDate;
use proptest::prelude::*;

use domain_customer::CustomerDetails;

/// Strategy for vehicle values in the low tier, `(0, 70000]`
pub fn low_tier_value_strategy() -> impl Strategy<Value = f64> {
    (1u64..=7_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for vehicle values in the mid tier, `(70000, 100000]`
pub fn mid_tier_value_strategy() -> impl Strategy<Value = f64> {
    (7_000_001u64..=10_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for vehicle values in the high tier, above 100000
pub fn high_tier_value_strategy() -> impl Strategy<Value = f64> {
    (10_000_001u64..=100_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for any positive vehicle value
pub fn vehicle_value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        low_tier_value_strategy(),
        mid_tier_value_strategy(),
        high_tier_value_strategy(),
    ]
}

/// Strategy for non-positive vehicle values
pub fn non_positive_value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(-0.0), -1_000_000.0f64..0.0]
}

/// Strategy for the preferred region in any letter case
pub fn preferred_location_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("SP"), Just("sp"), Just("Sp"), Just("sP")].prop_map(String::from)
}

/// Strategy for two-letter region codes other than the preferred one
pub fn other_location_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}".prop_filter("preferred region", |s| !s.eq_ignore_ascii_case("SP"))
}

/// Strategy for non-blank names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,15}( [A-Z][a-z]{2,15})?"
}

/// Strategy for eleven-digit documents
pub fn document_strategy() -> impl Strategy<Value = String> {
    "[0-9]{11}"
}

/// Strategy for birth dates between 1940 and 2005
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1940i32..=2005, 1u32..=12, 1u32..=28)
        .prop_filter_map("valid date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// Strategy for complete, valid customer input
pub fn customer_details_strategy() -> impl Strategy<Value = CustomerDetails> {
    (
        name_strategy(),
        document_strategy(),
        birth_date_strategy(),
        prop_oneof![preferred_location_strategy(), other_location_strategy()],
        vehicle_value_strategy(),
    )
        .prop_map(|(name, document, birth_date, location, vehicle_value)| CustomerDetails {
            name,
            document,
            birth_date,
            location,
            vehicle_value,
        })
}
