//! Quote domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::products::Product;
use crate::vendors::Vendor;

/// A vendor's price for a product.
///
/// `converted_price` is `price` expressed in the reference currency using
/// `conversion_rate`, captured when the quote was recorded. It is never
/// recomputed when rates change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub vendor_id: String,
    pub product_id: String,
    pub price: Decimal,
    pub currency: String,
    pub converted_price: Decimal,
    pub conversion_rate: Decimal,
    pub quote_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A quote with its vendor and product loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    #[serde(flatten)]
    pub quote: Quote,
    pub vendor: Vendor,
    pub product: Product,
}

/// Input model for recording a quote.
///
/// A missing `currency` means the quote is priced in the vendor's currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub vendor_id: String,
    pub product_id: String,
    pub price: Decimal,
    pub currency: Option<String>,
    pub quote_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl NewQuote {
    pub fn new(vendor_id: &str, product_id: &str, price: Decimal) -> Self {
        Self {
            vendor_id: vendor_id.to_string(),
            product_id: product_id.to_string(),
            price,
            currency: None,
            quote_date: None,
            notes: None,
        }
    }

    pub fn in_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }

    pub fn dated(mut self, quote_date: DateTime<Utc>) -> Self {
        self.quote_date = Some(quote_date);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// A validated quote with its conversion resolved, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedQuote {
    pub vendor_id: String,
    pub product_id: String,
    pub price: Decimal,
    pub currency: String,
    pub converted_price: Decimal,
    pub conversion_rate: Decimal,
    pub quote_date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Orders quotes cheapest first. Ties go to the earlier quote, then to the
/// lower id, so the order is total and stable.
pub fn cheapest_first(a: &QuoteDetails, b: &QuoteDetails) -> Ordering {
    a.quote
        .converted_price
        .cmp(&b.quote.converted_price)
        .then_with(|| a.quote.quote_date.cmp(&b.quote.quote_date))
        .then_with(|| a.quote.id.cmp(&b.quote.id))
}
