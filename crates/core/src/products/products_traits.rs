//! Product repository and service traits.

use async_trait::async_trait;

use super::products_model::{NewProduct, Product, ProductAttribute, ProductUpdate};
use crate::errors::Result;

/// Trait defining the contract for Product repository operations.
#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    async fn create(&self, new_product: NewProduct) -> Result<Product>;

    /// Applies an update. Returns `None` when the product does not exist.
    async fn update(&self, product_id: &str, update: ProductUpdate) -> Result<Option<Product>>;

    /// Deletes a product by its ID and returns the number of deleted records.
    async fn delete(&self, product_id: &str) -> Result<usize>;

    fn get_by_id(&self, product_id: &str) -> Result<Option<Product>>;

    fn get_by_name(&self, name: &str) -> Result<Option<Product>>;

    /// Lists products by name. `None` means unbounded / no skip.
    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Product>>;

    fn list_by_brand(&self, brand_id: &str) -> Result<Vec<Product>>;

    fn list_by_specification(&self, specification_id: &str) -> Result<Vec<Product>>;

    fn count(&self) -> Result<i64>;

    /// Inserts the attribute or replaces the value already stored under `name`.
    async fn set_attribute(
        &self,
        product_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ProductAttribute>;

    /// Returns the number of deleted records.
    async fn remove_attribute(&self, product_id: &str, name: &str) -> Result<usize>;

    /// Attributes of a product, ordered by name.
    fn list_attributes(&self, product_id: &str) -> Result<Vec<ProductAttribute>>;
}

/// Trait defining the contract for Product service operations.
#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn create_product(&self, new_product: NewProduct) -> Result<Product>;

    fn get_product(&self, product_id: &str) -> Result<Product>;

    fn get_product_by_name(&self, name: &str) -> Result<Product>;

    fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>>;

    fn list_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>>;

    fn list_products_by_specification(&self, specification_id: &str) -> Result<Vec<Product>>;

    async fn update_product(&self, product_id: &str, update: ProductUpdate) -> Result<Product>;

    async fn delete_product(&self, product_id: &str) -> Result<()>;

    fn count_products(&self) -> Result<i64>;

    async fn set_product_attribute(
        &self,
        product_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ProductAttribute>;

    async fn remove_product_attribute(&self, product_id: &str, name: &str) -> Result<()>;

    fn list_product_attributes(&self, product_id: &str) -> Result<Vec<ProductAttribute>>;
}
