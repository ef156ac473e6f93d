//! Configuration and service wiring for an opened ledger.

use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::brands::BrandRepository;
use crate::db::{self, DbPool, WriteHandle};
use crate::fx::FxRepository;
use crate::products::ProductRepository;
use crate::quotes::QuoteRepository;
use crate::specifications::SpecificationRepository;
use crate::vendors::VendorRepository;
use pricebook_core::brands::{BrandService, BrandServiceTrait};
use pricebook_core::constants::DEFAULT_REFERENCE_CURRENCY;
use pricebook_core::fx::{validate_currency_code, FxService, FxServiceTrait};
use pricebook_core::products::{ProductService, ProductServiceTrait};
use pricebook_core::quotes::{QuoteService, QuoteServiceTrait};
use pricebook_core::specifications::{SpecificationService, SpecificationServiceTrait};
use pricebook_core::vendors::{VendorService, VendorServiceTrait};
use pricebook_core::errors::ValidationError;
use pricebook_core::Result;

/// Default number of pooled connections. One of them belongs to the writer.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Name of the data directory created under the user's home.
const DEFAULT_DATA_DIR_NAME: &str = ".pricebook";

/// Parses a `PRICEBOOK_DB_POOL_SIZE` value. Unset or blank means the default.
fn parse_pool_size(value: Option<&str>) -> Result<u32> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_POOL_SIZE),
        Some(raw) => match raw.parse::<u32>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ValidationError::new(
                "pool_size",
                format!("pool size must be a positive integer, got '{raw}'"),
            )
            .into()),
        },
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR_NAME))
}

/// Settings needed to open a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub data_dir: PathBuf,
    /// Explicit database file, read from `DATABASE_URL`. When unset the
    /// file lives in `data_dir`.
    pub database_path: Option<PathBuf>,
    pub reference_currency: String,
    pub pool_size: u32,
}

impl LedgerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_path: None,
            reference_currency: DEFAULT_REFERENCE_CURRENCY.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("PRICEBOOK_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let database_path = std::env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let reference_currency = match std::env::var("PRICEBOOK_REFERENCE_CURRENCY") {
            Ok(code) if !code.trim().is_empty() => {
                validate_currency_code("reference_currency", &code)?
            }
            _ => DEFAULT_REFERENCE_CURRENCY.to_string(),
        };

        let pool_size =
            parse_pool_size(std::env::var("PRICEBOOK_DB_POOL_SIZE").ok().as_deref())?;

        Ok(Self {
            data_dir,
            database_path,
            reference_currency,
            pool_size,
        })
    }

    pub fn with_reference_currency(mut self, code: &str) -> Self {
        self.reference_currency = code.to_string();
        self
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Database file this configuration opens.
    pub fn db_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| db::get_db_path(&self.data_dir))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// An opened ledger: the pool, the writer and every service wired to them.
///
/// Must be opened from within a Tokio runtime, since the writer actor is a
/// spawned task.
pub struct LedgerContext {
    db_path: PathBuf,
    pool: Arc<DbPool>,
    writer: WriteHandle,
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub brand_service: Arc<dyn BrandServiceTrait>,
    pub vendor_service: Arc<dyn VendorServiceTrait>,
    pub specification_service: Arc<dyn SpecificationServiceTrait>,
    pub product_service: Arc<dyn ProductServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

impl LedgerContext {
    pub fn open(config: &LedgerConfig) -> Result<Self> {
        let reference_currency =
            validate_currency_code("reference_currency", &config.reference_currency)?;

        let db_path = config.db_path();
        let db_path_str = db::init(&db_path.to_string_lossy())?;
        info!("Database path in use: {}", db_path_str);

        let pool = db::create_pool(&db_path_str, config.pool_size)?;
        db::run_migrations(&pool)?;
        let writer = db::spawn_writer((*pool).clone());

        let fx_repo = Arc::new(FxRepository::new(pool.clone(), writer.clone()));
        let brand_repo = Arc::new(BrandRepository::new(pool.clone(), writer.clone()));
        let vendor_repo = Arc::new(VendorRepository::new(pool.clone(), writer.clone()));
        let specification_repo =
            Arc::new(SpecificationRepository::new(pool.clone(), writer.clone()));
        let product_repo = Arc::new(ProductRepository::new(pool.clone(), writer.clone()));
        let quote_repo = Arc::new(QuoteRepository::new(pool.clone(), writer.clone()));

        let fx_service: Arc<dyn FxServiceTrait> = Arc::new(FxService::new(fx_repo));
        let brand_service = Arc::new(BrandService::new(brand_repo.clone()));
        let vendor_service = Arc::new(VendorService::new(vendor_repo.clone(), brand_repo.clone()));
        let specification_service =
            Arc::new(SpecificationService::new(specification_repo.clone()));
        let product_service = Arc::new(ProductService::new(
            product_repo.clone(),
            brand_repo,
            specification_repo,
        ));
        let quote_service = Arc::new(QuoteService::new(
            quote_repo,
            vendor_repo,
            product_repo,
            fx_service.clone(),
            &reference_currency,
        ));

        info!(
            "Ledger opened with reference currency {}",
            quote_service.reference_currency()
        );

        Ok(Self {
            db_path,
            pool,
            writer,
            fx_service,
            brand_service,
            vendor_service,
            specification_service,
            product_service,
            quote_service,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn pool(&self) -> Arc<DbPool> {
        self.pool.clone()
    }

    pub fn writer(&self) -> WriteHandle {
        self.writer.clone()
    }
}
