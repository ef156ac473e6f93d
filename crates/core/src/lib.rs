//! Pricebook Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Pricebook ledger: forex
//! rates, vendor quotes and the reference data they point at. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod brands;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod products;
pub mod quotes;
pub mod specifications;
pub mod utils;
pub mod vendors;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
