use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::brands_model::{normalize_brand_name, Brand, NewBrand};
use super::brands_traits::{BrandRepositoryTrait, BrandServiceTrait};
use crate::errors::{DuplicateError, NotFoundError, Result};
use crate::utils::pagination::page_bounds;

/// Service for managing brands
pub struct BrandService {
    repository: Arc<dyn BrandRepositoryTrait>,
}

impl BrandService {
    pub fn new(repository: Arc<dyn BrandRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BrandServiceTrait for BrandService {
    async fn create_brand(&self, name: &str) -> Result<Brand> {
        let new_brand = NewBrand {
            name: name.to_string(),
        }
        .normalize()?;

        if self.repository.get_by_name(&new_brand.name)?.is_some() {
            return Err(DuplicateError::new("Brand", new_brand.name).into());
        }

        debug!("Creating brand '{}'", new_brand.name);
        self.repository.create(new_brand).await
    }

    fn get_brand(&self, brand_id: &str) -> Result<Brand> {
        self.repository
            .get_by_id(brand_id)?
            .ok_or_else(|| NotFoundError::new("Brand", brand_id).into())
    }

    fn get_brand_by_name(&self, name: &str) -> Result<Brand> {
        let name = name.trim();
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| NotFoundError::new("Brand", name).into())
    }

    fn list_brands(&self, limit: i64, offset: i64) -> Result<Vec<Brand>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list(limit, offset)
    }

    async fn update_brand(&self, brand_id: &str, new_name: &str) -> Result<Brand> {
        let new_name = normalize_brand_name(new_name)?;
        self.get_brand(brand_id)?;

        if let Some(existing) = self.repository.get_by_name(&new_name)? {
            if existing.id != brand_id {
                return Err(DuplicateError::new("Brand", new_name).into());
            }
        }

        self.repository
            .update_name(brand_id, &new_name)
            .await?
            .ok_or_else(|| NotFoundError::new("Brand", brand_id).into())
    }

    async fn delete_brand(&self, brand_id: &str) -> Result<()> {
        if self.repository.delete(brand_id).await? == 0 {
            return Err(NotFoundError::new("Brand", brand_id).into());
        }
        Ok(())
    }

    fn count_brands(&self) -> Result<i64> {
        self.repository.count()
    }
}
