use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::SpecificationDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::specifications;
use pricebook_core::specifications::{
    NewSpecification, Specification, SpecificationRepositoryTrait,
};
use pricebook_core::Result;

/// Repository for managing specification data in the database
pub struct SpecificationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SpecificationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SpecificationRepositoryTrait for SpecificationRepository {
    async fn create(&self, new_specification: NewSpecification) -> Result<Specification> {
        let specification_db = SpecificationDB::from(new_specification);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(specifications::table)
                    .values(&specification_db)
                    .execute(conn)
                    .into_core()?;
                Ok(specification_db.into())
            })
            .await
    }

    async fn update(
        &self,
        specification_id: &str,
        update: NewSpecification,
    ) -> Result<Option<Specification>> {
        let specification_id = specification_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(specifications::table.find(&specification_id))
                    .set((
                        specifications::name.eq(update.name),
                        specifications::description.eq(update.description),
                        specifications::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Ok(None);
                }

                let specification = specifications::table
                    .find(&specification_id)
                    .select(SpecificationDB::as_select())
                    .first::<SpecificationDB>(conn)
                    .into_core()?;
                Ok(Some(specification.into()))
            })
            .await
    }

    async fn delete(&self, specification_id: &str) -> Result<usize> {
        let specification_id = specification_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(specifications::table.find(specification_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, specification_id: &str) -> Result<Option<Specification>> {
        let mut conn = get_connection(&self.pool)?;
        let specification = specifications::table
            .find(specification_id)
            .select(SpecificationDB::as_select())
            .first::<SpecificationDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(specification.map(Specification::from))
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Specification>> {
        let mut conn = get_connection(&self.pool)?;
        let specification = specifications::table
            .filter(specifications::name.eq(name))
            .select(SpecificationDB::as_select())
            .first::<SpecificationDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(specification.map(Specification::from))
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Specification>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = specifications::table
            .select(SpecificationDB::as_select())
            .order(specifications::name.asc())
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        let rows = query.load::<SpecificationDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Specification::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        specifications::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }
}
