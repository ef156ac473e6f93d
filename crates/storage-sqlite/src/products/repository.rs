use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::{ProductAttributeDB, ProductDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{product_attributes, products};
use pricebook_core::products::{
    NewProduct, Product, ProductAttribute, ProductRepositoryTrait, ProductUpdate,
};
use pricebook_core::Result;

/// Repository for managing product data in the database
pub struct ProductRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProductRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product> {
        let product_db = ProductDB::from(new_product);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(products::table)
                    .values(&product_db)
                    .execute(conn)
                    .into_core()?;
                Ok(product_db.into())
            })
            .await
    }

    async fn update(&self, product_id: &str, update: ProductUpdate) -> Result<Option<Product>> {
        let product_id = product_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(products::table.find(&product_id))
                    .set((
                        products::name.eq(update.name),
                        products::description.eq(update.description),
                        products::specification_id.eq(update.specification_id),
                        products::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Ok(None);
                }

                let product = products::table
                    .find(&product_id)
                    .select(ProductDB::as_select())
                    .first::<ProductDB>(conn)
                    .into_core()?;
                Ok(Some(product.into()))
            })
            .await
    }

    async fn delete(&self, product_id: &str) -> Result<usize> {
        let product_id = product_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(products::table.find(product_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, product_id: &str) -> Result<Option<Product>> {
        let mut conn = get_connection(&self.pool)?;
        let product = products::table
            .find(product_id)
            .select(ProductDB::as_select())
            .first::<ProductDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(product.map(Product::from))
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        let mut conn = get_connection(&self.pool)?;
        let product = products::table
            .filter(products::name.eq(name))
            .select(ProductDB::as_select())
            .first::<ProductDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(product.map(Product::from))
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = products::table
            .select(ProductDB::as_select())
            .order(products::name.asc())
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        let rows = query.load::<ProductDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn list_by_brand(&self, brand_id: &str) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = products::table
            .filter(products::brand_id.eq(brand_id))
            .select(ProductDB::as_select())
            .order(products::name.asc())
            .load::<ProductDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn list_by_specification(&self, specification_id: &str) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = products::table
            .filter(products::specification_id.eq(specification_id))
            .select(ProductDB::as_select())
            .order(products::name.asc())
            .load::<ProductDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        products::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    async fn set_attribute(
        &self,
        product_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ProductAttribute> {
        let attribute_db = ProductAttributeDB {
            product_id: product_id.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            updated_at: chrono::Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(product_attributes::table)
                    .values(&attribute_db)
                    .on_conflict((product_attributes::product_id, product_attributes::name))
                    .do_update()
                    .set((
                        product_attributes::value.eq(&attribute_db.value),
                        product_attributes::updated_at.eq(attribute_db.updated_at),
                    ))
                    .execute(conn)
                    .into_core()?;
                Ok(attribute_db.into())
            })
            .await
    }

    async fn remove_attribute(&self, product_id: &str, name: &str) -> Result<usize> {
        let product_id = product_id.to_string();
        let name = name.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(
                    product_attributes::table
                        .filter(product_attributes::product_id.eq(&product_id))
                        .filter(product_attributes::name.eq(&name)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    fn list_attributes(&self, product_id: &str) -> Result<Vec<ProductAttribute>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = product_attributes::table
            .filter(product_attributes::product_id.eq(product_id))
            .select(ProductAttributeDB::as_select())
            .order(product_attributes::name.asc())
            .load::<ProductAttributeDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(ProductAttribute::from).collect())
    }
}
