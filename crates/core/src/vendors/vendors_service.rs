use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::vendors_model::{normalize_vendor_name, NewVendor, Vendor};
use super::vendors_traits::{VendorRepositoryTrait, VendorServiceTrait};
use crate::brands::{Brand, BrandRepositoryTrait};
use crate::errors::{DuplicateError, NotFoundError, Result};
use crate::utils::pagination::page_bounds;

/// Service for managing vendors and their brand associations
pub struct VendorService {
    repository: Arc<dyn VendorRepositoryTrait>,
    brand_repository: Arc<dyn BrandRepositoryTrait>,
}

impl VendorService {
    pub fn new(
        repository: Arc<dyn VendorRepositoryTrait>,
        brand_repository: Arc<dyn BrandRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            brand_repository,
        }
    }

    fn require_brand(&self, brand_id: &str) -> Result<Brand> {
        self.brand_repository
            .get_by_id(brand_id)?
            .ok_or_else(|| NotFoundError::new("Brand", brand_id).into())
    }
}

#[async_trait]
impl VendorServiceTrait for VendorService {
    async fn create_vendor(&self, new_vendor: NewVendor) -> Result<Vendor> {
        let new_vendor = new_vendor.normalize()?;

        if self.repository.get_by_name(&new_vendor.name)?.is_some() {
            return Err(DuplicateError::new("Vendor", new_vendor.name).into());
        }

        debug!(
            "Creating vendor '{}' with currency {}",
            new_vendor.name, new_vendor.currency
        );
        self.repository.create(new_vendor).await
    }

    fn get_vendor(&self, vendor_id: &str) -> Result<Vendor> {
        self.repository
            .get_by_id(vendor_id)?
            .ok_or_else(|| NotFoundError::new("Vendor", vendor_id).into())
    }

    fn get_vendor_by_name(&self, name: &str) -> Result<Vendor> {
        let name = name.trim();
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| NotFoundError::new("Vendor", name).into())
    }

    fn list_vendors(&self, limit: i64, offset: i64) -> Result<Vec<Vendor>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list(limit, offset)
    }

    async fn update_vendor(&self, vendor_id: &str, new_name: &str) -> Result<Vendor> {
        let new_name = normalize_vendor_name(new_name)?;
        self.get_vendor(vendor_id)?;

        if let Some(existing) = self.repository.get_by_name(&new_name)? {
            if existing.id != vendor_id {
                return Err(DuplicateError::new("Vendor", new_name).into());
            }
        }

        self.repository
            .update_name(vendor_id, &new_name)
            .await?
            .ok_or_else(|| NotFoundError::new("Vendor", vendor_id).into())
    }

    async fn delete_vendor(&self, vendor_id: &str) -> Result<()> {
        if self.repository.delete(vendor_id).await? == 0 {
            return Err(NotFoundError::new("Vendor", vendor_id).into());
        }
        Ok(())
    }

    fn count_vendors(&self) -> Result<i64> {
        self.repository.count()
    }

    async fn add_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()> {
        self.get_vendor(vendor_id)?;
        self.require_brand(brand_id)?;
        self.repository.add_brand(vendor_id, brand_id).await
    }

    async fn remove_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()> {
        self.get_vendor(vendor_id)?;
        self.require_brand(brand_id)?;
        self.repository.remove_brand(vendor_id, brand_id).await?;
        Ok(())
    }

    fn list_vendor_brands(&self, vendor_id: &str) -> Result<Vec<Brand>> {
        self.get_vendor(vendor_id)?;
        self.repository.list_brands(vendor_id)
    }
}
