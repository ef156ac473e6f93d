//! Specifications module - general product types such as "Laptop".

mod specifications_model;
mod specifications_service;
mod specifications_traits;


pub use specifications_model::{NewSpecification, Specification};
pub use specifications_service::SpecificationService;
pub use specifications_traits::{SpecificationRepositoryTrait, SpecificationServiceTrait};
