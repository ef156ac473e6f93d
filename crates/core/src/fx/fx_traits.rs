use super::fx_model::{Conversion, ForexRate, NewForexRate};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for forex rate persistence.
///
/// Rates are an append-only time series; there is no update operation.
#[async_trait]
pub trait FxRepositoryTrait: Send + Sync {
    /// Inserts an already normalized rate.
    async fn insert_rate(&self, new_rate: NewForexRate) -> Result<ForexRate>;

    /// Returns the row with the greatest effective date for the exact ordered pair.
    fn get_latest_rate(&self, from: &str, to: &str) -> Result<Option<ForexRate>>;

    /// Lists rates newest first. `None` means unbounded / no skip.
    fn list_rates(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<ForexRate>>;

    /// Deletes a rate and returns the number of deleted rows.
    async fn delete_rate(&self, rate_id: &str) -> Result<usize>;

    fn count_rates(&self) -> Result<i64>;
}

/// Trait defining the contract for forex service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    async fn create_rate(&self, new_rate: NewForexRate) -> Result<ForexRate>;

    fn get_latest_rate(&self, from_currency: &str, to_currency: &str) -> Result<ForexRate>;

    /// Converts `amount` using the latest rate for the pair.
    fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Conversion>;

    /// Lists rates; `limit <= 0` is unbounded and `offset <= 0` skips nothing.
    fn list_rates(&self, limit: i64, offset: i64) -> Result<Vec<ForexRate>>;

    async fn delete_rate(&self, rate_id: &str) -> Result<()>;

    fn count_rates(&self) -> Result<i64>;
}
