//! Database model for specifications.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pricebook_core::specifications::{NewSpecification, Specification};

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::specifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SpecificationDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<SpecificationDB> for Specification {
    fn from(db: SpecificationDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewSpecification> for SpecificationDB {
    fn from(domain: NewSpecification) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: domain.name,
            description: domain.description,
            created_at: now,
            updated_at: now,
        }
    }
}
