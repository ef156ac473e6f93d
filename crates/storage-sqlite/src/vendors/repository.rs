use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::VendorDB;
use crate::brands::BrandDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{brands, vendor_brands, vendors};
use pricebook_core::brands::Brand;
use pricebook_core::vendors::{NewVendor, Vendor, VendorRepositoryTrait};
use pricebook_core::Result;

/// Repository for managing vendor data in the database
pub struct VendorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl VendorRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl VendorRepositoryTrait for VendorRepository {
    async fn create(&self, new_vendor: NewVendor) -> Result<Vendor> {
        let vendor_db = VendorDB::from(new_vendor);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(vendors::table)
                    .values(&vendor_db)
                    .execute(conn)
                    .into_core()?;
                Ok(vendor_db.into())
            })
            .await
    }

    async fn update_name(&self, vendor_id: &str, name: &str) -> Result<Option<Vendor>> {
        let vendor_id = vendor_id.to_string();
        let name = name.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(vendors::table.find(&vendor_id))
                    .set((
                        vendors::name.eq(&name),
                        vendors::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Ok(None);
                }

                let vendor = vendors::table
                    .find(&vendor_id)
                    .select(VendorDB::as_select())
                    .first::<VendorDB>(conn)
                    .into_core()?;
                Ok(Some(vendor.into()))
            })
            .await
    }

    async fn delete(&self, vendor_id: &str) -> Result<usize> {
        let vendor_id = vendor_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(vendors::table.find(vendor_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, vendor_id: &str) -> Result<Option<Vendor>> {
        let mut conn = get_connection(&self.pool)?;
        let vendor = vendors::table
            .find(vendor_id)
            .select(VendorDB::as_select())
            .first::<VendorDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(vendor.map(Vendor::from))
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Vendor>> {
        let mut conn = get_connection(&self.pool)?;
        let vendor = vendors::table
            .filter(vendors::name.eq(name))
            .select(VendorDB::as_select())
            .first::<VendorDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(vendor.map(Vendor::from))
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Vendor>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = vendors::table
            .select(VendorDB::as_select())
            .order(vendors::name.asc())
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        let rows = query.load::<VendorDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Vendor::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        vendors::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    async fn add_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()> {
        let vendor_id = vendor_id.to_string();
        let brand_id = brand_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::insert_or_ignore_into(vendor_brands::table)
                    .values((
                        vendor_brands::vendor_id.eq(vendor_id),
                        vendor_brands::brand_id.eq(brand_id),
                    ))
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }

    async fn remove_brand(&self, vendor_id: &str, brand_id: &str) -> Result<usize> {
        let vendor_id = vendor_id.to_string();
        let brand_id = brand_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(
                    vendor_brands::table
                        .filter(vendor_brands::vendor_id.eq(vendor_id))
                        .filter(vendor_brands::brand_id.eq(brand_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    fn list_brands(&self, vendor_id: &str) -> Result<Vec<Brand>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vendor_brands::table
            .inner_join(brands::table)
            .filter(vendor_brands::vendor_id.eq(vendor_id))
            .select(BrandDB::as_select())
            .order(brands::name.asc())
            .load::<BrandDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Brand::from).collect())
    }
}
