//! Vendor repository and service traits.

use async_trait::async_trait;

use super::vendors_model::{NewVendor, Vendor};
use crate::brands::Brand;
use crate::errors::Result;

/// Trait defining the contract for Vendor repository operations.
#[async_trait]
pub trait VendorRepositoryTrait: Send + Sync {
    async fn create(&self, new_vendor: NewVendor) -> Result<Vendor>;

    /// Renames a vendor. Returns `None` when the vendor does not exist.
    async fn update_name(&self, vendor_id: &str, name: &str) -> Result<Option<Vendor>>;

    /// Deletes a vendor by its ID and returns the number of deleted records.
    async fn delete(&self, vendor_id: &str) -> Result<usize>;

    fn get_by_id(&self, vendor_id: &str) -> Result<Option<Vendor>>;

    fn get_by_name(&self, name: &str) -> Result<Option<Vendor>>;

    /// Lists vendors by name. `None` means unbounded / no skip.
    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Vendor>>;

    fn count(&self) -> Result<i64>;

    /// Associates a brand with a vendor. Existing associations are left as is.
    async fn add_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()>;

    /// Removes a brand association and returns the number of removed rows.
    async fn remove_brand(&self, vendor_id: &str, brand_id: &str) -> Result<usize>;

    /// Brands carried by a vendor, ordered by name.
    fn list_brands(&self, vendor_id: &str) -> Result<Vec<Brand>>;
}

/// Trait defining the contract for Vendor service operations.
#[async_trait]
pub trait VendorServiceTrait: Send + Sync {
    async fn create_vendor(&self, new_vendor: NewVendor) -> Result<Vendor>;

    fn get_vendor(&self, vendor_id: &str) -> Result<Vendor>;

    fn get_vendor_by_name(&self, name: &str) -> Result<Vendor>;

    fn list_vendors(&self, limit: i64, offset: i64) -> Result<Vec<Vendor>>;

    async fn update_vendor(&self, vendor_id: &str, new_name: &str) -> Result<Vendor>;

    async fn delete_vendor(&self, vendor_id: &str) -> Result<()>;

    fn count_vendors(&self) -> Result<i64>;

    async fn add_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()>;

    async fn remove_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()>;

    fn list_vendor_brands(&self, vendor_id: &str) -> Result<Vec<Brand>>;
}
