//! SQLite storage implementation for vendor quotes.

mod model;
mod repository;

pub use model::QuoteDB;
pub use repository::QuoteRepository;
