//! Database model for vendors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pricebook_core::vendors::{NewVendor, Vendor};

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::vendors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VendorDB {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub discount_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<VendorDB> for Vendor {
    fn from(db: VendorDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            currency: db.currency,
            discount_code: db.discount_code,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewVendor> for VendorDB {
    fn from(domain: NewVendor) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: domain.name,
            currency: domain.currency,
            discount_code: domain.discount_code,
            created_at: now,
            updated_at: now,
        }
    }
}
