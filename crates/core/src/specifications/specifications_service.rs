use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::specifications_model::{NewSpecification, Specification};
use super::specifications_traits::{SpecificationRepositoryTrait, SpecificationServiceTrait};
use crate::errors::{DuplicateError, NotFoundError, Result};
use crate::utils::pagination::page_bounds;

/// Service for managing specifications
pub struct SpecificationService {
    repository: Arc<dyn SpecificationRepositoryTrait>,
}

impl SpecificationService {
    pub fn new(repository: Arc<dyn SpecificationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SpecificationServiceTrait for SpecificationService {
    async fn create_specification(
        &self,
        new_specification: NewSpecification,
    ) -> Result<Specification> {
        let new_specification = new_specification.normalize()?;

        if self
            .repository
            .get_by_name(&new_specification.name)?
            .is_some()
        {
            return Err(DuplicateError::new("Specification", new_specification.name).into());
        }

        debug!("Creating specification '{}'", new_specification.name);
        self.repository.create(new_specification).await
    }

    fn get_specification(&self, specification_id: &str) -> Result<Specification> {
        self.repository
            .get_by_id(specification_id)?
            .ok_or_else(|| NotFoundError::new("Specification", specification_id).into())
    }

    fn get_specification_by_name(&self, name: &str) -> Result<Specification> {
        let name = name.trim();
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| NotFoundError::new("Specification", name).into())
    }

    fn list_specifications(&self, limit: i64, offset: i64) -> Result<Vec<Specification>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list(limit, offset)
    }

    async fn update_specification(
        &self,
        specification_id: &str,
        update: NewSpecification,
    ) -> Result<Specification> {
        let update = update.normalize()?;
        self.get_specification(specification_id)?;

        if let Some(existing) = self.repository.get_by_name(&update.name)? {
            if existing.id != specification_id {
                return Err(DuplicateError::new("Specification", update.name).into());
            }
        }

        self.repository
            .update(specification_id, update)
            .await?
            .ok_or_else(|| NotFoundError::new("Specification", specification_id).into())
    }

    async fn delete_specification(&self, specification_id: &str) -> Result<()> {
        if self.repository.delete(specification_id).await? == 0 {
            return Err(NotFoundError::new("Specification", specification_id).into());
        }
        Ok(())
    }

    fn count_specifications(&self) -> Result<i64> {
        self.repository.count()
    }
}
