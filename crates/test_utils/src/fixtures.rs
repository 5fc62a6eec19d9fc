//! Pre-built Test Fixtures
//!
//! Ready-to-use customer data. The named fixtures are predictable; the
//! `random_*` helpers use `fake` for tests that only need plausible values.

use chrono::{Duration, NaiveDate};
use fake::faker::name::en::Name;
use fake::Fake;

use domain_customer::CustomerDetails;

/// Fixture for customer input data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Low-tier customer in the preferred region (premium 2500.0)
    pub fn jonatan() -> CustomerDetails {
        CustomerDetails {
            name: "Jonatan".to_string(),
            document: "12345678900".to_string(),
            birth_date: date(1990, 1, 1),
            location: "SP".to_string(),
            vehicle_value: 50000.0,
        }
    }

    /// Low-tier customer outside the preferred region (premium 2400.0)
    pub fn joao() -> CustomerDetails {
        CustomerDetails {
            name: "Joao".to_string(),
            document: "98765432100".to_string(),
            birth_date: date(1995, 5, 5),
            location: "RJ".to_string(),
            vehicle_value: 60000.0,
        }
    }

    /// High-tier customer (premium 9000.0)
    pub fn ricardo() -> CustomerDetails {
        CustomerDetails {
            name: "Ricardo".to_string(),
            document: "11122233344".to_string(),
            birth_date: date(1985, 10, 10),
            location: "SP".to_string(),
            vehicle_value: 150000.0,
        }
    }

    /// Customer with a zero vehicle value, rejected by the calculator
    pub fn leandro_zero_value() -> CustomerDetails {
        CustomerDetails {
            name: "Leandro".to_string(),
            document: "11122233344".to_string(),
            birth_date: date(1983, 11, 27),
            location: "SP".to_string(),
            vehicle_value: 0.0,
        }
    }

    /// Customer with randomly generated but valid details
    pub fn random() -> CustomerDetails {
        let document: u64 = (10_000_000_000u64..99_999_999_999u64).fake();
        let age_days: i64 = (18 * 365..80 * 365).fake();
        let cents: u64 = (1_000_000u64..25_000_000u64).fake();

        CustomerDetails {
            name: Name().fake(),
            document: document.to_string(),
            birth_date: date(2024, 1, 1) - Duration::days(age_days),
            location: StringFixtures::locations()[(0..4usize).fake::<usize>()].to_string(),
            vehicle_value: cents as f64 / 100.0,
        }
    }
}

/// Fixture for string values
pub struct StringFixtures;

impl StringFixtures {
    /// Region codes used across tests
    pub fn locations() -> [&'static str; 4] {
        ["SP", "RJ", "MG", "sp"]
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}
