//! Specification repository and service traits.

use async_trait::async_trait;

use super::specifications_model::{NewSpecification, Specification};
use crate::errors::Result;

/// Trait defining the contract for Specification repository operations.
#[async_trait]
pub trait SpecificationRepositoryTrait: Send + Sync {
    async fn create(&self, new_specification: NewSpecification) -> Result<Specification>;

    /// Replaces name and description. Returns `None` when the specification
    /// does not exist.
    async fn update(
        &self,
        specification_id: &str,
        update: NewSpecification,
    ) -> Result<Option<Specification>>;

    /// Deletes a specification and returns the number of deleted records.
    /// Linked products keep existing with their link cleared.
    async fn delete(&self, specification_id: &str) -> Result<usize>;

    fn get_by_id(&self, specification_id: &str) -> Result<Option<Specification>>;

    fn get_by_name(&self, name: &str) -> Result<Option<Specification>>;

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Specification>>;

    fn count(&self) -> Result<i64>;
}

/// Trait defining the contract for Specification service operations.
#[async_trait]
pub trait SpecificationServiceTrait: Send + Sync {
    async fn create_specification(
        &self,
        new_specification: NewSpecification,
    ) -> Result<Specification>;

    fn get_specification(&self, specification_id: &str) -> Result<Specification>;

    fn get_specification_by_name(&self, name: &str) -> Result<Specification>;

    fn list_specifications(&self, limit: i64, offset: i64) -> Result<Vec<Specification>>;

    async fn update_specification(
        &self,
        specification_id: &str,
        update: NewSpecification,
    ) -> Result<Specification>;

    async fn delete_specification(&self, specification_id: &str) -> Result<()>;

    fn count_specifications(&self) -> Result<i64>;
}
