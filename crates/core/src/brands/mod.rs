//! Brands module - the manufacturers products belong to.

mod brands_model;
mod brands_service;
mod brands_traits;


pub use brands_model::{Brand, NewBrand};
pub use brands_service::BrandService;
pub use brands_traits::{BrandRepositoryTrait, BrandServiceTrait};
