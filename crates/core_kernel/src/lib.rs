//! Core Kernel - Foundational types shared by every layer of the quote service
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed record identifiers
//! - Port abstractions for swappable persistence adapters
//! - Common error types

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::CustomerId;
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata,
};
