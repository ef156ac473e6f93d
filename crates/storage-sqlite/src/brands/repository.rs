use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::BrandDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::brands;
use pricebook_core::brands::{Brand, BrandRepositoryTrait, NewBrand};
use pricebook_core::Result;

/// Repository for managing brand data in the database
pub struct BrandRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BrandRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BrandRepositoryTrait for BrandRepository {
    async fn create(&self, new_brand: NewBrand) -> Result<Brand> {
        let brand_db = BrandDB::from(new_brand);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(brands::table)
                    .values(&brand_db)
                    .execute(conn)
                    .into_core()?;
                Ok(brand_db.into())
            })
            .await
    }

    async fn update_name(&self, brand_id: &str, name: &str) -> Result<Option<Brand>> {
        let brand_id = brand_id.to_string();
        let name = name.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(brands::table.find(&brand_id))
                    .set((
                        brands::name.eq(&name),
                        brands::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Ok(None);
                }

                let brand = brands::table
                    .find(&brand_id)
                    .select(BrandDB::as_select())
                    .first::<BrandDB>(conn)
                    .into_core()?;
                Ok(Some(brand.into()))
            })
            .await
    }

    async fn delete(&self, brand_id: &str) -> Result<usize> {
        let brand_id = brand_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(brands::table.find(brand_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, brand_id: &str) -> Result<Option<Brand>> {
        let mut conn = get_connection(&self.pool)?;
        let brand = brands::table
            .find(brand_id)
            .select(BrandDB::as_select())
            .first::<BrandDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(brand.map(Brand::from))
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let mut conn = get_connection(&self.pool)?;
        let brand = brands::table
            .filter(brands::name.eq(name))
            .select(BrandDB::as_select())
            .first::<BrandDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(brand.map(Brand::from))
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Brand>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = brands::table
            .select(BrandDB::as_select())
            .order(brands::name.asc())
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        let rows = query.load::<BrandDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Brand::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        brands::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }
}
