//! Database model for forex rates.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use pricebook_core::fx::{ForexRate, NewForexRate};

/// Database model for forex rates. `rate` is stored as TEXT.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::forex_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ForexRateDB {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: String,
    pub effective_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<NewForexRate> for ForexRateDB {
    fn from(domain: NewForexRate) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from_currency: domain.from_currency,
            to_currency: domain.to_currency,
            rate: domain.rate.to_string(),
            effective_date: domain.effective_date.unwrap_or(now).naive_utc(),
            created_at: now.naive_utc(),
        }
    }
}

impl TryFrom<ForexRateDB> for ForexRate {
    type Error = StorageError;

    fn try_from(db: ForexRateDB) -> Result<Self, Self::Error> {
        let rate = parse_decimal("rate", &db.rate)?;
        Ok(Self {
            id: db.id,
            from_currency: db.from_currency,
            to_currency: db.to_currency,
            rate,
            effective_date: Utc.from_utc_datetime(&db.effective_date),
            created_at: db.created_at,
        })
    }
}

/// Parses a decimal column, naming the column on failure.
pub(crate) fn parse_decimal(column: &str, value: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value).map_err(|e| {
        StorageError::SerializationError(format!("invalid decimal in {column} '{value}': {e}"))
    })
}
