use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::products_model::{
    normalize_attribute, NewProduct, Product, ProductAttribute, ProductUpdate,
};
use super::products_traits::{ProductRepositoryTrait, ProductServiceTrait};
use crate::brands::BrandRepositoryTrait;
use crate::errors::{DuplicateError, NotFoundError, Result};
use crate::specifications::SpecificationRepositoryTrait;
use crate::utils::pagination::page_bounds;

/// Service for managing products and their attributes
pub struct ProductService {
    repository: Arc<dyn ProductRepositoryTrait>,
    brand_repository: Arc<dyn BrandRepositoryTrait>,
    specification_repository: Arc<dyn SpecificationRepositoryTrait>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepositoryTrait>,
        brand_repository: Arc<dyn BrandRepositoryTrait>,
        specification_repository: Arc<dyn SpecificationRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            brand_repository,
            specification_repository,
        }
    }

    fn require_specification(&self, specification_id: Option<&str>) -> Result<()> {
        if let Some(id) = specification_id {
            if self.specification_repository.get_by_id(id)?.is_none() {
                return Err(NotFoundError::new("Specification", id).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn create_product(&self, new_product: NewProduct) -> Result<Product> {
        let new_product = new_product.normalize()?;

        if self
            .brand_repository
            .get_by_id(&new_product.brand_id)?
            .is_none()
        {
            return Err(NotFoundError::new("Brand", new_product.brand_id).into());
        }
        self.require_specification(new_product.specification_id.as_deref())?;

        if self.repository.get_by_name(&new_product.name)?.is_some() {
            return Err(DuplicateError::new("Product", new_product.name).into());
        }

        debug!(
            "Creating product '{}' for brand {}",
            new_product.name, new_product.brand_id
        );
        self.repository.create(new_product).await
    }

    fn get_product(&self, product_id: &str) -> Result<Product> {
        self.repository
            .get_by_id(product_id)?
            .ok_or_else(|| NotFoundError::new("Product", product_id).into())
    }

    fn get_product_by_name(&self, name: &str) -> Result<Product> {
        let name = name.trim();
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| NotFoundError::new("Product", name).into())
    }

    fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list(limit, offset)
    }

    fn list_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>> {
        self.repository.list_by_brand(brand_id)
    }

    fn list_products_by_specification(&self, specification_id: &str) -> Result<Vec<Product>> {
        self.repository.list_by_specification(specification_id)
    }

    async fn update_product(&self, product_id: &str, update: ProductUpdate) -> Result<Product> {
        let update = update.normalize()?;
        self.get_product(product_id)?;
        self.require_specification(update.specification_id.as_deref())?;

        if let Some(existing) = self.repository.get_by_name(&update.name)? {
            if existing.id != product_id {
                return Err(DuplicateError::new("Product", update.name).into());
            }
        }

        self.repository
            .update(product_id, update)
            .await?
            .ok_or_else(|| NotFoundError::new("Product", product_id).into())
    }

    async fn delete_product(&self, product_id: &str) -> Result<()> {
        if self.repository.delete(product_id).await? == 0 {
            return Err(NotFoundError::new("Product", product_id).into());
        }
        Ok(())
    }

    fn count_products(&self) -> Result<i64> {
        self.repository.count()
    }

    async fn set_product_attribute(
        &self,
        product_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ProductAttribute> {
        let (name, value) = normalize_attribute(name, value)?;
        self.get_product(product_id)?;

        debug!("Setting attribute '{}' on product {}", name, product_id);
        self.repository.set_attribute(product_id, &name, &value).await
    }

    async fn remove_product_attribute(&self, product_id: &str, name: &str) -> Result<()> {
        self.get_product(product_id)?;

        let name = name.trim();
        if self.repository.remove_attribute(product_id, name).await? == 0 {
            return Err(
                NotFoundError::new("Product attribute", format!("{product_id}/{name}")).into(),
            );
        }
        Ok(())
    }

    fn list_product_attributes(&self, product_id: &str) -> Result<Vec<ProductAttribute>> {
        self.get_product(product_id)?;
        self.repository.list_attributes(product_id)
    }
}
