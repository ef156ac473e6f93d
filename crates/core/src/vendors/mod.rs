//! Vendors module - selling entities and the brands they carry.

mod vendors_model;
mod vendors_service;
mod vendors_traits;


pub use vendors_model::{NewVendor, Vendor};
pub use vendors_service::VendorService;
pub use vendors_traits::{VendorRepositoryTrait, VendorServiceTrait};
