//! SQLite storage implementation for vendors and their brand associations.

mod model;
mod repository;

pub use model::VendorDB;
pub use repository::VendorRepository;
