//! Database model for products.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pricebook_core::products::{NewProduct, Product, ProductAttribute};

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductDB {
    pub id: String,
    pub name: String,
    pub brand_id: String,
    pub specification_id: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ProductDB> for Product {
    fn from(db: ProductDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            brand_id: db.brand_id,
            specification_id: db.specification_id,
            sku: db.sku,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewProduct> for ProductDB {
    fn from(domain: NewProduct) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: domain.name,
            brand_id: domain.brand_id,
            specification_id: domain.specification_id,
            sku: domain.sku,
            description: domain.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::product_attributes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductAttributeDB {
    pub product_id: String,
    pub name: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

impl From<ProductAttributeDB> for ProductAttribute {
    fn from(db: ProductAttributeDB) -> Self {
        Self {
            product_id: db.product_id,
            name: db.name,
            value: db.value,
            updated_at: db.updated_at,
        }
    }
}
