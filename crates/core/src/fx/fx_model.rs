use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::validate_currency_code;
use crate::errors::{Result, ValidationError};

/// A directional exchange rate valid from `effective_date`.
///
/// `rate` converts one unit of `from_currency` into `to_currency`. The inverse
/// direction is a separate row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForexRate {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
    pub effective_date: DateTime<Utc>,
    pub created_at: NaiveDateTime,
}

impl ForexRate {
    /// The implicit 1.0 rate between a currency and itself. It has no persisted
    /// identity, so `id` is empty.
    pub fn identity(currency: &str) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            from_currency: currency.to_string(),
            to_currency: currency.to_string(),
            rate: Decimal::ONE,
            effective_date: now,
            created_at: now.naive_utc(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewForexRate {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
    pub effective_date: Option<DateTime<Utc>>,
}

impl NewForexRate {
    pub fn new(from_currency: &str, to_currency: &str, rate: Decimal) -> Self {
        Self {
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            rate,
            effective_date: None,
        }
    }

    pub fn effective_at(mut self, effective_date: DateTime<Utc>) -> Self {
        self.effective_date = Some(effective_date);
        self
    }

    /// Validates the rate and returns it with normalized codes and a concrete
    /// effective date.
    pub fn normalize(self) -> Result<Self> {
        let from_currency = validate_currency_code("from_currency", &self.from_currency)?;
        let to_currency = validate_currency_code("to_currency", &self.to_currency)?;
        if self.rate <= Decimal::ZERO {
            return Err(ValidationError::new("rate", "rate must be positive").into());
        }
        Ok(Self {
            from_currency,
            to_currency,
            rate: self.rate,
            effective_date: Some(self.effective_date.unwrap_or_else(Utc::now)),
        })
    }
}

/// Result of converting an amount with the latest rate for a pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub amount: Decimal,
    pub rate: Decimal,
}

impl Conversion {
    /// Applies `rate` to `amount`. Fails instead of overflowing the decimal range.
    pub fn apply(amount: Decimal, rate: Decimal) -> Result<Self> {
        let converted = amount.checked_mul(rate).ok_or_else(|| {
            ValidationError::new(
                "amount",
                format!("{amount} at rate {rate} is outside the representable range"),
            )
        })?;
        Ok(Self {
            amount: converted,
            rate,
        })
    }
}
