//! SQLite storage implementation for Pricebook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `pricebook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//! - `LedgerContext`, which opens a database and wires the services
//!
//! # Architecture
//!
//! This crate is the only place where Diesel dependencies exist. The core
//! crate is database-agnostic and works with traits.
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

pub mod context;
pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod brands;
pub mod fx;
pub mod products;
pub mod quotes;
pub mod specifications;
pub mod vendors;

pub use context::{LedgerConfig, LedgerContext};

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from pricebook-core for convenience
pub use pricebook_core::errors::{DatabaseError, Error, Result};
