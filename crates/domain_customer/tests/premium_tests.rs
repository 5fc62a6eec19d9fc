//! Premium Calculation Tests
//!
//! This module contains tests for the tiered premium calculator:
//! - Rate tier selection and boundary handling
//! - Location sensitivity of the low tier
//! - Input rejection rules
//! - Determinism properties
//!
//! # Test Organization
//!
//! - `boundary_tests` - Inclusive tier boundaries
//! - `location_tests` - Preferred-region handling
//! - `rejection_tests` - Invalid input handling
//! - `property_tests` - proptest-based invariants

use domain_customer::premium::{
    RateTier, INVALID_INPUT_MESSAGE, LOW_TIER_CEILING, MID_TIER_CEILING,
};
use domain_customer::{CustomerError, PremiumCalculator};
use proptest::prelude::*;
use test_utils::{
    high_tier_value_strategy, low_tier_value_strategy, mid_tier_value_strategy,
    non_positive_value_strategy, other_location_strategy, preferred_location_strategy,
};

fn calculate(value: f64, location: &str) -> f64 {
    PremiumCalculator::new()
        .calculate(Some(value), Some(location))
        .expect("calculation should succeed")
}

// ============================================================================
// BOUNDARY TESTS
// ============================================================================

mod boundary_tests {
    use super::*;

    /// Exactly 70 000 still gets the low-tier rate
    #[test]
    fn test_low_tier_ceiling_is_inclusive() {
        assert_eq!(calculate(70000.0, "SP"), 3500.0);
        assert_eq!(calculate(70000.0, "RJ"), 2800.0);
    }

    /// Just above 70 000 moves to the mid tier
    #[test]
    fn test_just_above_low_tier_moves_to_mid() {
        assert_eq!(calculate(70000.1, "RJ"), 70000.1 * 0.055);
        assert_eq!(calculate(70000.1, "SP"), 70000.1 * 0.055);
    }

    /// Exactly 100 000 gets the mid-tier rate
    #[test]
    fn test_mid_tier_ceiling_is_inclusive() {
        assert_eq!(calculate(100000.0, "SP"), 5500.0);
    }

    /// Just above 100 000 moves to the high tier
    #[test]
    fn test_just_above_mid_tier_moves_to_high() {
        assert_eq!(calculate(100000.1, "RJ"), 100000.1 * 0.06);
    }

    /// High-tier vehicles pay 6%
    #[test]
    fn test_high_tier() {
        assert_eq!(calculate(150000.0, "SP"), 9000.0);
    }

    /// Tier lookup agrees with the exported ceilings
    #[test]
    fn test_tier_for_ceilings() {
        assert_eq!(RateTier::for_value(LOW_TIER_CEILING), RateTier::Low);
        assert_eq!(RateTier::for_value(MID_TIER_CEILING), RateTier::Mid);
        assert_eq!(RateTier::for_value(MID_TIER_CEILING * 2.0), RateTier::High);
    }

    /// Tiny positive values are accepted and priced in the low tier
    #[test]
    fn test_smallest_positive_value() {
        assert_eq!(calculate(0.01, "RJ"), 0.01 * 0.04);
    }
}

// ============================================================================
// LOCATION TESTS
// ============================================================================

mod location_tests {
    use super::*;

    /// Preferred region matching ignores case
    #[test]
    fn test_sp_is_case_insensitive() {
        assert_eq!(calculate(50000.0, "sp"), 2500.0);
        assert_eq!(calculate(50000.0, "sP"), 2500.0);
    }

    /// Other regions get the standard low-tier rate
    #[test]
    fn test_other_regions_use_standard_rate() {
        assert_eq!(calculate(60000.0, "RJ"), 2400.0);
        assert_eq!(calculate(60000.0, "MG"), 2400.0);
    }

    /// Surrounding whitespace is not stripped before matching
    #[test]
    fn test_padded_region_is_not_preferred() {
        assert_eq!(calculate(50000.0, " SP "), 2000.0);
    }

    /// An empty location is present, so it prices at the standard rate
    #[test]
    fn test_empty_location_is_accepted() {
        assert_eq!(calculate(50000.0, ""), 2000.0);
    }
}

// ============================================================================
// REJECTION TESTS
// ============================================================================

mod rejection_tests {
    use super::*;

    fn assert_invalid(result: Result<f64, CustomerError>) {
        match result {
            Err(CustomerError::InvalidInput(message)) => {
                assert_eq!(message, INVALID_INPUT_MESSAGE)
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_value_rejected() {
        assert_invalid(PremiumCalculator::new().calculate(None, Some("SP")));
    }

    #[test]
    fn test_zero_value_rejected() {
        assert_invalid(PremiumCalculator::new().calculate(Some(0.0), Some("SP")));
    }

    #[test]
    fn test_negative_value_rejected() {
        assert_invalid(PremiumCalculator::new().calculate(Some(-100.0), Some("SP")));
    }

    #[test]
    fn test_absent_location_rejected() {
        assert_invalid(PremiumCalculator::new().calculate(Some(50000.0), None));
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

proptest! {
    /// Identical inputs always produce identical premiums
    #[test]
    fn prop_calculation_is_deterministic(value in 0.01f64..1.0e9, location in "[A-Za-z]{0,3}") {
        let calculator = PremiumCalculator::new();
        let first = calculator.calculate(Some(value), Some(&location)).unwrap();
        let second = calculator.calculate(Some(value), Some(&location)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Low-tier vehicles in the preferred region pay 5%, in any letter case
    #[test]
    fn prop_low_tier_preferred_region(value in low_tier_value_strategy(), location in preferred_location_strategy()) {
        prop_assert_eq!(RateTier::for_value(value), RateTier::Low);
        prop_assert_eq!(calculate(value, &location), value * 0.05);
    }

    /// Low-tier vehicles elsewhere pay 4%
    #[test]
    fn prop_low_tier_other_region(value in low_tier_value_strategy(), location in other_location_strategy()) {
        prop_assert_eq!(calculate(value, &location), value * 0.04);
    }

    /// Mid-tier vehicles pay 5.5% wherever they are
    #[test]
    fn prop_mid_tier_ignores_location(
        value in mid_tier_value_strategy(),
        preferred in preferred_location_strategy(),
        other in other_location_strategy(),
    ) {
        prop_assert_eq!(RateTier::for_value(value), RateTier::Mid);
        prop_assert_eq!(calculate(value, &preferred), value * 0.055);
        prop_assert_eq!(calculate(value, &other), value * 0.055);
    }

    /// High-tier vehicles pay 6% wherever they are
    #[test]
    fn prop_high_tier_ignores_location(
        value in high_tier_value_strategy(),
        preferred in preferred_location_strategy(),
        other in other_location_strategy(),
    ) {
        prop_assert_eq!(RateTier::for_value(value), RateTier::High);
        prop_assert_eq!(calculate(value, &preferred), value * 0.06);
        prop_assert_eq!(calculate(value, &other), value * 0.06);
    }

    /// Non-positive values are always rejected
    #[test]
    fn prop_non_positive_values_rejected(value in non_positive_value_strategy(), location in preferred_location_strategy()) {
        let result = PremiumCalculator::new().calculate(Some(value), Some(&location));
        prop_assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
    }
}
