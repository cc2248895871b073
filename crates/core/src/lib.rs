//! FX Deals Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for accepting FX deals.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod currency;
pub mod deals;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
