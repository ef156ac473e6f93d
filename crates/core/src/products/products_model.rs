//! Product domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a product of a given brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand_id: String,
    pub specification_id: Option<String>,
    /// Stock keeping unit, unique when present
    pub sku: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub brand_id: String,
    pub specification_id: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl NewProduct {
    pub fn new(name: &str, brand_id: &str) -> Self {
        Self {
            name: name.to_string(),
            brand_id: brand_id.to_string(),
            specification_id: None,
            sku: None,
            description: None,
        }
    }

    pub fn with_specification(mut self, specification_id: &str) -> Self {
        self.specification_id = Some(specification_id.to_string());
        self
    }

    pub fn with_sku(mut self, sku: &str) -> Self {
        self.sku = Some(sku.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn normalize(self) -> Result<Self> {
        Ok(Self {
            name: normalize_product_name(&self.name)?,
            brand_id: self.brand_id,
            specification_id: trim_optional(self.specification_id),
            sku: trim_optional(self.sku),
            description: trim_optional(self.description),
        })
    }
}

/// Input model for updating an existing product. A `None` specification
/// clears the link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub specification_id: Option<String>,
}

impl ProductUpdate {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            specification_id: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_specification(mut self, specification_id: &str) -> Self {
        self.specification_id = Some(specification_id.to_string());
        self
    }

    pub fn normalize(self) -> Result<Self> {
        Ok(Self {
            name: normalize_product_name(&self.name)?,
            description: trim_optional(self.description),
            specification_id: trim_optional(self.specification_id),
        })
    }
}

/// A named attribute value recorded for a product, e.g. `RAM = 16 GB`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    pub product_id: String,
    pub name: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

/// Trims an attribute name and value, rejecting blanks.
pub(crate) fn normalize_attribute(name: &str, value: &str) -> Result<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", "attribute name cannot be empty").into());
    }
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new("value", "attribute value cannot be empty").into());
    }
    Ok((name.to_string(), value.to_string()))
}

fn normalize_product_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", "product name cannot be empty").into());
    }
    Ok(name.to_string())
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
