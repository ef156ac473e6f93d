//! Quote repository and service traits.

use async_trait::async_trait;

use super::quotes_model::{ConvertedQuote, NewQuote, QuoteDetails};
use crate::errors::Result;

/// Trait defining the contract for Quote repository operations.
///
/// Every read returns quotes joined with their vendor and product.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Inserts a quote and returns it with vendor and product loaded, as a
    /// single atomic write. A vendor or product missing at write time is a
    /// not-found error.
    async fn create(&self, quote: ConvertedQuote) -> Result<QuoteDetails>;

    fn get_by_id(&self, quote_id: &str) -> Result<Option<QuoteDetails>>;

    /// Lists quotes newest first. `None` means unbounded / no skip.
    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<QuoteDetails>>;

    fn list_by_product(&self, product_id: &str) -> Result<Vec<QuoteDetails>>;

    fn list_by_vendor(&self, vendor_id: &str) -> Result<Vec<QuoteDetails>>;

    /// Deletes a quote by its ID and returns the number of deleted records.
    async fn delete(&self, quote_id: &str) -> Result<usize>;

    fn count(&self) -> Result<i64>;
}

/// Trait defining the contract for Quote service operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Records a quote, converting its price into the reference currency.
    async fn create_quote(&self, new_quote: NewQuote) -> Result<QuoteDetails>;

    fn get_quote(&self, quote_id: &str) -> Result<QuoteDetails>;

    /// The quote with the lowest converted price for a product.
    fn get_best_quote(&self, product_id: &str) -> Result<QuoteDetails>;

    /// All quotes for a product, cheapest first.
    fn list_by_product(&self, product_id: &str) -> Result<Vec<QuoteDetails>>;

    /// All quotes from a vendor, newest first.
    fn list_by_vendor(&self, vendor_id: &str) -> Result<Vec<QuoteDetails>>;

    fn list_quotes(&self, limit: i64, offset: i64) -> Result<Vec<QuoteDetails>>;

    async fn delete_quote(&self, quote_id: &str) -> Result<()>;

    fn count_quotes(&self) -> Result<i64>;

    /// Currency every converted price is expressed in.
    fn reference_currency(&self) -> &str;
}
