//! Premium calculation
//!
//! Premiums come from a static three-tier rate table keyed on vehicle value.
//! Location only matters in the lowest tier, where vehicles registered in the
//! preferred region pay a different flat rate.
//!
//! ```text
//! vehicle value          rate
//! ---------------------  ------------------------------
//! <= 70 000              5.0% in "SP", 4.0% elsewhere
//! <= 100 000             5.5%
//! >  100 000             6.0%
//! ```
//!
//! Tier upper bounds are inclusive. Amounts are plain `f64` products with no
//! rounding to currency cents.

use tracing::info;

use crate::error::CustomerError;

/// Upper bound (inclusive) of the low tier
pub const LOW_TIER_CEILING: f64 = 70_000.0;

/// Upper bound (inclusive) of the mid tier
pub const MID_TIER_CEILING: f64 = 100_000.0;

/// Region code that earns the low-tier preferential rate
pub const PREFERRED_LOCATION: &str = "SP";

/// Message returned for any rejected calculation input
pub const INVALID_INPUT_MESSAGE: &str = "Invalid vehicle value or location";

const LOW_TIER_PREFERRED_RATE: f64 = 0.05;
const LOW_TIER_STANDARD_RATE: f64 = 0.04;
const MID_TIER_RATE: f64 = 0.055;
const HIGH_TIER_RATE: f64 = 0.06;

/// Vehicle value band of the rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTier {
    /// Up to and including 70 000
    Low,
    /// Above 70 000, up to and including 100 000
    Mid,
    /// Above 100 000
    High,
}

impl RateTier {
    /// Returns the tier a vehicle value falls into
    pub fn for_value(vehicle_value: f64) -> Self {
        if vehicle_value <= LOW_TIER_CEILING {
            RateTier::Low
        } else if vehicle_value <= MID_TIER_CEILING {
            RateTier::Mid
        } else {
            RateTier::High
        }
    }

    /// Returns the flat rate of this tier for a location
    pub fn rate(&self, location: &str) -> f64 {
        match self {
            RateTier::Low if is_preferred_location(location) => LOW_TIER_PREFERRED_RATE,
            RateTier::Low => LOW_TIER_STANDARD_RATE,
            RateTier::Mid => MID_TIER_RATE,
            RateTier::High => HIGH_TIER_RATE,
        }
    }
}

fn is_preferred_location(location: &str) -> bool {
    location.eq_ignore_ascii_case(PREFERRED_LOCATION)
}

/// Computes insurance premiums from the static rate table
///
/// The calculator is stateless; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumCalculator;

impl PremiumCalculator {
    /// Creates a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculates the premium for a vehicle value and location
    ///
    /// # Arguments
    ///
    /// * `vehicle_value` - Declared vehicle value; must be present and positive
    /// * `location` - Region code; must be present
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::InvalidInput` when the value is absent, zero,
    /// negative, or NaN, or when the location is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_customer::PremiumCalculator;
    ///
    /// let premium = PremiumCalculator::new().calculate(Some(70000.0), Some("SP")).unwrap();
    /// assert_eq!(premium, 3500.0);
    /// ```
    pub fn calculate(
        &self,
        vehicle_value: Option<f64>,
        location: Option<&str>,
    ) -> Result<f64, CustomerError> {
        info!(?vehicle_value, ?location, "Calculating insurance");

        let (vehicle_value, location) = match (vehicle_value, location) {
            // NaN fails the comparison as well
            (Some(value), Some(location)) if value > 0.0 => (value, location),
            _ => return Err(CustomerError::invalid_input(INVALID_INPUT_MESSAGE)),
        };

        let rate = RateTier::for_value(vehicle_value).rate(location);
        Ok(vehicle_value * rate)
    }
}
