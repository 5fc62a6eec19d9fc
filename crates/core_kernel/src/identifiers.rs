//! Strongly-typed identifiers for persisted records
//!
//! Record identifiers are surrogate keys assigned by the store on first
//! persistence. Wrapping the raw integer keeps them from being mixed up with
//! other numeric values such as amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Store-assigned identifier of a customer record
///
/// Identifiers are monotonically increasing and never reused by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a raw store key
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw store key
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| CoreError::validation(format!("invalid customer id '{}': {}", s, e)))
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> i64 {
        id.0
    }
}
