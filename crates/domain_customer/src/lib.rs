//! Customer Quote Domain
//!
//! This crate holds the business logic of the vehicle insurance quote service,
//! kept free of HTTP and SQL concerns.
//!
//! # Components
//!
//! - **Premium Calculator**: tiered flat-rate lookup over vehicle value and location
//! - **Customer**: the persisted record a quote request produces
//! - **CustomerStore**: the persistence port, with an in-memory adapter
//! - **CustomerService**: the use cases behind the HTTP endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_customer::{CustomerService, InMemoryCustomerStore};
//!
//! let service = CustomerService::new(Arc::new(InMemoryCustomerStore::new()));
//! let quote = service.calculate_insurance(details).await?;
//! assert!(quote.id.is_none());
//! ```

pub mod customer;
pub mod premium;
pub mod quote;
pub mod error;
pub mod ports;
pub mod services;

pub use customer::{Customer, CustomerDetails};
pub use premium::{PremiumCalculator, RateTier};
pub use quote::{InsuranceQuote, QuoteAmount};
pub use error::CustomerError;
pub use ports::CustomerStore;
pub use ports::memory::InMemoryCustomerStore;
pub use services::CustomerService;
