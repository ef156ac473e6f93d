//! SQLite storage implementation for specifications.

mod model;
mod repository;

pub use model::SpecificationDB;
pub use repository::SpecificationRepository;
