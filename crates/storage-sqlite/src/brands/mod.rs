//! SQLite storage implementation for brands.

mod model;
mod repository;

pub use model::BrandDB;
pub use repository::BrandRepository;
