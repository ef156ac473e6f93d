//! SQLite storage implementation for forex rates.

mod model;
mod repository;

pub(crate) use model::parse_decimal;
pub use model::ForexRateDB;
pub use repository::FxRepository;
