//! Vendor domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VENDOR_CURRENCY;
use crate::errors::{Result, ValidationError};
use crate::fx::validate_currency_code;

/// Domain model representing a vendor that issues quotes.
///
/// `currency` is the vendor's native currency; quotes submitted without a
/// currency are assumed to be priced in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub discount_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    pub name: String,
    pub currency: String,
    pub discount_code: Option<String>,
}

impl NewVendor {
    pub fn new(name: &str, currency: &str) -> Self {
        Self {
            name: name.to_string(),
            currency: currency.to_string(),
            discount_code: None,
        }
    }

    pub fn with_discount_code(mut self, discount_code: &str) -> Self {
        self.discount_code = Some(discount_code.to_string());
        self
    }

    /// Trims the name and discount code, defaults a blank currency and
    /// validates the rest.
    pub fn normalize(self) -> Result<Self> {
        let name = normalize_vendor_name(&self.name)?;

        let currency = if self.currency.trim().is_empty() {
            DEFAULT_VENDOR_CURRENCY.to_string()
        } else {
            validate_currency_code("currency", &self.currency)?
        };

        let discount_code = self
            .discount_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        Ok(Self {
            name,
            currency,
            discount_code,
        })
    }
}

pub(crate) fn normalize_vendor_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", "vendor name cannot be empty").into());
    }
    Ok(name.to_string())
}
