//! SQLite storage implementation for products.

mod model;
mod repository;

pub use model::{ProductAttributeDB, ProductDB};
pub use repository::ProductRepository;
