//! Brand repository and service traits.

use async_trait::async_trait;

use super::brands_model::{Brand, NewBrand};
use crate::errors::Result;

/// Trait defining the contract for Brand repository operations.
#[async_trait]
pub trait BrandRepositoryTrait: Send + Sync {
    async fn create(&self, new_brand: NewBrand) -> Result<Brand>;

    /// Renames a brand. Returns `None` when the brand does not exist.
    async fn update_name(&self, brand_id: &str, name: &str) -> Result<Option<Brand>>;

    /// Deletes a brand by its ID and returns the number of deleted records.
    async fn delete(&self, brand_id: &str) -> Result<usize>;

    fn get_by_id(&self, brand_id: &str) -> Result<Option<Brand>>;

    fn get_by_name(&self, name: &str) -> Result<Option<Brand>>;

    /// Lists brands by name. `None` means unbounded / no skip.
    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Brand>>;

    fn count(&self) -> Result<i64>;
}

/// Trait defining the contract for Brand service operations.
#[async_trait]
pub trait BrandServiceTrait: Send + Sync {
    async fn create_brand(&self, name: &str) -> Result<Brand>;

    fn get_brand(&self, brand_id: &str) -> Result<Brand>;

    fn get_brand_by_name(&self, name: &str) -> Result<Brand>;

    fn list_brands(&self, limit: i64, offset: i64) -> Result<Vec<Brand>>;

    async fn update_brand(&self, brand_id: &str, new_name: &str) -> Result<Brand>;

    async fn delete_brand(&self, brand_id: &str) -> Result<()>;

    fn count_brands(&self) -> Result<i64>;
}
