//! Database model for brands.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pricebook_core::brands::{Brand, NewBrand};

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BrandDB {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BrandDB> for Brand {
    fn from(db: BrandDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewBrand> for BrandDB {
    fn from(domain: NewBrand) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: domain.name,
            created_at: now,
            updated_at: now,
        }
    }
}
