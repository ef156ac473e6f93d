use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::ForexRateDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::forex_rates;
use pricebook_core::fx::{ForexRate, FxRepositoryTrait, NewForexRate};
use pricebook_core::{Error, Result};

/// Append-only store of directional exchange rates.
#[derive(Clone)]
pub struct FxRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FxRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl FxRepositoryTrait for FxRepository {
    async fn insert_rate(&self, new_rate: NewForexRate) -> Result<ForexRate> {
        let row = ForexRateDB::from(new_rate);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(forex_rates::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(ForexRate::try_from(row)?)
            })
            .await
    }

    fn get_latest_rate(&self, from: &str, to: &str) -> Result<Option<ForexRate>> {
        let mut conn = get_connection(&self.pool)?;

        let row = forex_rates::table
            .filter(forex_rates::from_currency.eq(from))
            .filter(forex_rates::to_currency.eq(to))
            .order((
                forex_rates::effective_date.desc(),
                forex_rates::created_at.desc(),
            ))
            .select(ForexRateDB::as_select())
            .first::<ForexRateDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(ForexRate::try_from)
            .transpose()
            .map_err(Error::from)
    }

    fn list_rates(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<ForexRate>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = forex_rates::table
            .select(ForexRateDB::as_select())
            .order((
                forex_rates::effective_date.desc(),
                forex_rates::from_currency.asc(),
                forex_rates::to_currency.asc(),
            ))
            .into_boxed();

        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }

        query
            .load::<ForexRateDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(|row| ForexRate::try_from(row).map_err(Error::from))
            .collect()
    }

    async fn delete_rate(&self, rate_id: &str) -> Result<usize> {
        let rate_id = rate_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(forex_rates::table.find(rate_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn count_rates(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        forex_rates::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }
}
