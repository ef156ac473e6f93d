//! Currency code helpers shared by every service that accepts a code.

use crate::constants::CURRENCY_CODE_LEN;
use crate::errors::{Result, ValidationError};

/// Trims and upper-cases a currency code.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalizes `code` and checks it is a three-letter ISO 4217 code.
///
/// The returned error names `field` so callers can point at the offending input.
pub fn validate_currency_code(field: &str, code: &str) -> Result<String> {
    let normalized = normalize_currency_code(code);
    if normalized.chars().count() != CURRENCY_CODE_LEN
        || !normalized.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(ValidationError::new(
            field,
            "currency must be a 3-letter ISO 4217 code",
        )
        .into());
    }
    Ok(normalized)
}

/// Key identifying an ordered currency pair, e.g. `"EUR/USD"`.
pub fn currency_pair_key(from: &str, to: &str) -> String {
    format!("{}/{}", from, to)
}
