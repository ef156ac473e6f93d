use super::currency::{currency_pair_key, normalize_currency_code};
use super::fx_model::{Conversion, ForexRate, NewForexRate};
use super::fx_traits::{FxRepositoryTrait, FxServiceTrait};
use crate::errors::{NotFoundError, Result};
use crate::utils::pagination::page_bounds;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Clone)]
pub struct FxService {
    repository: Arc<dyn FxRepositoryTrait>,
}

impl FxService {
    pub fn new(repository: Arc<dyn FxRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn create_rate(&self, new_rate: NewForexRate) -> Result<ForexRate> {
        let new_rate = new_rate.normalize()?;
        log::debug!(
            "Recording forex rate {}/{} = {}",
            new_rate.from_currency,
            new_rate.to_currency,
            new_rate.rate
        );
        self.repository.insert_rate(new_rate).await
    }

    fn get_latest_rate(&self, from_currency: &str, to_currency: &str) -> Result<ForexRate> {
        let from = normalize_currency_code(from_currency);
        let to = normalize_currency_code(to_currency);

        if from == to {
            return Ok(ForexRate::identity(&from));
        }

        match self.repository.get_latest_rate(&from, &to)? {
            Some(rate) => Ok(rate),
            None => {
                log::warn!("Exchange rate not available for {}/{}", from, to);
                Err(NotFoundError::new("Forex rate", currency_pair_key(&from, &to)).into())
            }
        }
    }

    fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Conversion> {
        let rate = self.get_latest_rate(from_currency, to_currency)?.rate;
        Conversion::apply(amount, rate)
    }

    fn list_rates(&self, limit: i64, offset: i64) -> Result<Vec<ForexRate>> {
        let (limit, offset) = page_bounds(limit, offset);
        self.repository.list_rates(limit, offset)
    }

    async fn delete_rate(&self, rate_id: &str) -> Result<()> {
        let deleted = self.repository.delete_rate(rate_id).await?;
        if deleted == 0 {
            return Err(NotFoundError::new("Forex", rate_id).into());
        }
        Ok(())
    }

    fn count_rates(&self) -> Result<i64> {
        self.repository.count_rates()
    }
}
