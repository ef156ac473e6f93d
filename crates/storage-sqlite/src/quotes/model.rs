//! Database model for quotes.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::fx::parse_decimal;
use crate::products::ProductDB;
use crate::vendors::VendorDB;
use pricebook_core::quotes::{ConvertedQuote, Quote, QuoteDetails};

/// Database model for quotes. Prices and the rate are stored as TEXT.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: String,
    pub vendor_id: String,
    pub product_id: String,
    pub price: String,
    pub currency: String,
    pub converted_price: String,
    pub conversion_rate: String,
    pub quote_date: NaiveDateTime,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Row shape of the quote, vendor and product join.
pub(crate) type QuoteRow = (QuoteDB, VendorDB, ProductDB);

impl From<ConvertedQuote> for QuoteDB {
    fn from(domain: ConvertedQuote) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vendor_id: domain.vendor_id,
            product_id: domain.product_id,
            price: domain.price.to_string(),
            currency: domain.currency,
            converted_price: domain.converted_price.to_string(),
            conversion_rate: domain.conversion_rate.to_string(),
            quote_date: domain.quote_date.naive_utc(),
            notes: domain.notes,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<QuoteDB> for Quote {
    type Error = StorageError;

    fn try_from(db: QuoteDB) -> Result<Self, Self::Error> {
        Ok(Self {
            price: parse_decimal("price", &db.price)?,
            converted_price: parse_decimal("converted_price", &db.converted_price)?,
            conversion_rate: parse_decimal("conversion_rate", &db.conversion_rate)?,
            id: db.id,
            vendor_id: db.vendor_id,
            product_id: db.product_id,
            currency: db.currency,
            quote_date: Utc.from_utc_datetime(&db.quote_date),
            notes: db.notes,
            created_at: db.created_at,
        })
    }
}

pub(crate) fn into_details((quote, vendor, product): QuoteRow) -> Result<QuoteDetails, StorageError> {
    Ok(QuoteDetails {
        quote: Quote::try_from(quote)?,
        vendor: vendor.into(),
        product: product.into(),
    })
}
