use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::quotes_model::{cheapest_first, ConvertedQuote, NewQuote, QuoteDetails};
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::errors::{NotFoundError, Result, ValidationError};
use crate::fx::{normalize_currency_code, validate_currency_code, FxServiceTrait};
use crate::products::{Product, ProductRepositoryTrait};
use crate::utils::pagination::page_bounds;
use crate::vendors::{Vendor, VendorRepositoryTrait};

/// Service for recording and comparing vendor quotes.
///
/// Every quote is converted into `reference_currency` when it is recorded,
/// which is what makes quotes in different currencies comparable.
pub struct QuoteService {
    repository: Arc<dyn QuoteRepositoryTrait>,
    vendor_repository: Arc<dyn VendorRepositoryTrait>,
    product_repository: Arc<dyn ProductRepositoryTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
    reference_currency: String,
}

impl QuoteService {
    pub fn new(
        repository: Arc<dyn QuoteRepositoryTrait>,
        vendor_repository: Arc<dyn VendorRepositoryTrait>,
        product_repository: Arc<dyn ProductRepositoryTrait>,
        fx_service: Arc<dyn FxServiceTrait>,
        reference_currency: &str,
    ) -> Self {
        Self {
            repository,
            vendor_repository,
            product_repository,
            fx_service,
            reference_currency: normalize_currency_code(reference_currency),
        }
    }

    fn require_vendor(&self, vendor_id: &str) -> Result<Vendor> {
        self.vendor_repository
            .get_by_id(vendor_id)?
            .ok_or_else(|| NotFoundError::new("Vendor", vendor_id).into())
    }

    fn require_product(&self, product_id: &str) -> Result<Product> {
        self.product_repository
            .get_by_id(product_id)?
            .ok_or_else(|| NotFoundError::new("Product", product_id).into())
    }

    /// The quote's native currency: the supplied code when non-blank,
    /// otherwise the vendor's own currency.
    fn native_currency(new_quote: &NewQuote, vendor: &Vendor) -> Result<String> {
        match new_quote.currency.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => validate_currency_code("currency", code),
            _ => Ok(vendor.currency.clone()),
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn create_quote(&self, new_quote: NewQuote) -> Result<QuoteDetails> {
        if new_quote.price <= Decimal::ZERO {
            return Err(ValidationError::new("price", "price must be positive").into());
        }

        let vendor = self.require_vendor(&new_quote.vendor_id)?;
        self.require_product(&new_quote.product_id)?;

        let currency = Self::native_currency(&new_quote, &vendor)?;
        let conversion =
            self.fx_service
                .convert(new_quote.price, &currency, &self.reference_currency)?;

        debug!(
            "Quote from vendor {}: {} {} -> {} {} (rate {})",
            vendor.name,
            new_quote.price,
            currency,
            conversion.amount,
            self.reference_currency,
            conversion.rate
        );

        let quote = ConvertedQuote {
            vendor_id: new_quote.vendor_id,
            product_id: new_quote.product_id,
            price: new_quote.price,
            currency,
            converted_price: conversion.amount,
            conversion_rate: conversion.rate,
            quote_date: new_quote.quote_date.unwrap_or_else(Utc::now),
            notes: new_quote
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };

        self.repository.create(quote).await
    }

    fn get_quote(&self, quote_id: &str) -> Result<QuoteDetails> {
        self.repository
            .get_by_id(quote_id)?
            .ok_or_else(|| NotFoundError::new("Quote", quote_id).into())
    }

    fn get_best_quote(&self, product_id: &str) -> Result<QuoteDetails> {
        self.require_product(product_id)?;

        self.repository
            .list_by_product(product_id)?
            .into_iter()
            .min_by(cheapest_first)
            .ok_or_else(|| NotFoundError::new("Quote for product", product_id).into())
    }

    fn list_by_product(&self, product_id: &str) -> Result<Vec<QuoteDetails>> {
        let mut quotes = self.repository.list_by_product(product_id)?;
        quotes.sort_by(cheapest_first);
        Ok(quotes)
    }

    fn list_by_vendor(&self, vendor_id: &str) -> Result<Vec<QuoteDetails>> {
        let mut quotes = self.repository.list_by_vendor(vendor_id)?;
        quotes.sort_by(|a, b| {
            b.quote
                .quote_date
                .cmp(&a.quote.quote_date)
                .then_with(|| a.quote.id.cmp(&b.quote.id))
        });
        Ok(quotes)
    }

    fn list_quotes(&self, limit: i64, offset: i64) -> Result<Vec<QuoteDetails>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list(limit, offset)
    }

    async fn delete_quote(&self, quote_id: &str) -> Result<()> {
        if self.repository.delete(quote_id).await? == 0 {
            return Err(NotFoundError::new("Quote", quote_id).into());
        }
        Ok(())
    }

    fn count_quotes(&self) -> Result<i64> {
        self.repository.count()
    }

    fn reference_currency(&self) -> &str {
        &self.reference_currency
    }
}
