//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built customer data matching the documented examples
//! - `builders`: Builders for domain input and HTTP request bodies
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for quotes and JSON responses
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
