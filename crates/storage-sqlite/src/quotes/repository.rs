use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::{into_details, QuoteDB, QuoteRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::products::ProductDB;
use crate::schema::{products, quotes, vendors};
use crate::vendors::VendorDB;
use pricebook_core::quotes::{ConvertedQuote, QuoteDetails, QuoteRepositoryTrait};
use pricebook_core::errors::NotFoundError;
use pricebook_core::{Error, Result};

/// Repository for quotes. Every read joins the vendor and product rows.
pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn to_details(rows: Vec<QuoteRow>) -> Result<Vec<QuoteDetails>> {
    rows.into_iter()
        .map(|row| into_details(row).map_err(Error::from))
        .collect()
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    async fn create(&self, quote: ConvertedQuote) -> Result<QuoteDetails> {
        let quote_db = QuoteDB::from(quote);
        self.writer
            .exec(move |conn| {
                // Re-checked under the write lock so a vendor or product
                // deleted since the service looked is reported as missing.
                let vendor = vendors::table
                    .find(&quote_db.vendor_id)
                    .select(vendors::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?;
                if vendor.is_none() {
                    return Err(NotFoundError::new("Vendor", &quote_db.vendor_id).into());
                }
                let product = products::table
                    .find(&quote_db.product_id)
                    .select(products::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?;
                if product.is_none() {
                    return Err(NotFoundError::new("Product", &quote_db.product_id).into());
                }

                diesel::insert_into(quotes::table)
                    .values(&quote_db)
                    .execute(conn)
                    .into_core()?;

                let row = quotes::table
                    .inner_join(vendors::table)
                    .inner_join(products::table)
                    .filter(quotes::id.eq(&quote_db.id))
                    .select((
                        QuoteDB::as_select(),
                        VendorDB::as_select(),
                        ProductDB::as_select(),
                    ))
                    .first::<QuoteRow>(conn)
                    .into_core()?;
                Ok(into_details(row)?)
            })
            .await
    }

    fn get_by_id(&self, quote_id: &str) -> Result<Option<QuoteDetails>> {
        let mut conn = get_connection(&self.pool)?;
        let row = quotes::table
            .inner_join(vendors::table)
            .inner_join(products::table)
            .filter(quotes::id.eq(quote_id))
            .select((
                QuoteDB::as_select(),
                VendorDB::as_select(),
                ProductDB::as_select(),
            ))
            .first::<QuoteRow>(&mut conn)
            .optional()
            .into_core()?;

        row.map(into_details).transpose().map_err(Error::from)
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<QuoteDetails>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = quotes::table
            .inner_join(vendors::table)
            .inner_join(products::table)
            .select((
                QuoteDB::as_select(),
                VendorDB::as_select(),
                ProductDB::as_select(),
            ))
            .order((quotes::quote_date.desc(), quotes::id.asc()))
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        to_details(query.load::<QuoteRow>(&mut conn).into_core()?)
    }

    fn list_by_product(&self, product_id: &str) -> Result<Vec<QuoteDetails>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes::table
            .inner_join(vendors::table)
            .inner_join(products::table)
            .filter(quotes::product_id.eq(product_id))
            .select((
                QuoteDB::as_select(),
                VendorDB::as_select(),
                ProductDB::as_select(),
            ))
            .load::<QuoteRow>(&mut conn)
            .into_core()?;
        to_details(rows)
    }

    fn list_by_vendor(&self, vendor_id: &str) -> Result<Vec<QuoteDetails>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes::table
            .inner_join(vendors::table)
            .inner_join(products::table)
            .filter(quotes::vendor_id.eq(vendor_id))
            .select((
                QuoteDB::as_select(),
                VendorDB::as_select(),
                ProductDB::as_select(),
            ))
            .order((quotes::quote_date.desc(), quotes::id.asc()))
            .load::<QuoteRow>(&mut conn)
            .into_core()?;
        to_details(rows)
    }

    async fn delete(&self, quote_id: &str) -> Result<usize> {
        let quote_id = quote_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(quotes::table.find(quote_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        quotes::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }
}
