//! SQLite storage implementation for the FX deals warehouse.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fxdeals-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the deal entity
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod deals;

// Re-export database utilities
pub use db::{
    check_connection, create_pool, get_connection, init, run_migrations, spawn_writer,
    DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from fxdeals-core for convenience
pub use fxdeals_core::errors::{DatabaseError, Error, Result};
