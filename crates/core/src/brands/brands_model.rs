//! Brand domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a manufacturing brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: String,
}

impl NewBrand {
    /// Returns the brand with a trimmed, non-empty name.
    pub fn normalize(self) -> Result<Self> {
        Ok(Self {
            name: normalize_brand_name(&self.name)?,
        })
    }
}

pub(crate) fn normalize_brand_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", "brand name cannot be empty").into());
    }
    Ok(name.to_string())
}
