//! Products module - items vendors quote prices for.

mod products_model;
mod products_service;
mod products_traits;


pub use products_model::{NewProduct, Product, ProductAttribute, ProductUpdate};
pub use products_service::ProductService;
pub use products_traits::{ProductRepositoryTrait, ProductServiceTrait};
