//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! plain row types. Queries are checked at runtime so the crate builds without
//! a live database.

pub mod customer;

pub use customer::{CustomerRepository, CustomerRow, NewCustomer};
