//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces to
//! the PostgreSQL database layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_db::adapters::PostgresCustomerStore;
//! use domain_customer::CustomerStore;
//!
//! let store: Arc<dyn CustomerStore> = Arc::new(PostgresCustomerStore::new(pool));
//! ```

pub mod customer;

pub use customer::PostgresCustomerStore;
