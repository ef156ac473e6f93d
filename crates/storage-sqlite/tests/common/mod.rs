//! Shared setup for the SQLite integration tests.

#![allow(dead_code)]

use pricebook_core::brands::{Brand, BrandServiceTrait};
use pricebook_core::products::{NewProduct, Product, ProductServiceTrait};
use pricebook_core::vendors::{NewVendor, Vendor, VendorServiceTrait};
use pricebook_storage_sqlite::{LedgerConfig, LedgerContext};
use tempfile::TempDir;

/// A ledger backed by a database file in a temporary directory. The
/// directory is removed when this is dropped.
pub struct TestLedger {
    pub ctx: LedgerContext,
    _dir: TempDir,
}

impl std::ops::Deref for TestLedger {
    type Target = LedgerContext;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

/// Opens a fresh ledger. Must be called inside a Tokio runtime.
pub fn open_ledger() -> TestLedger {
    open_ledger_with(|config| config)
}

pub fn open_ledger_with(configure: impl FnOnce(LedgerConfig) -> LedgerConfig) -> TestLedger {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = configure(LedgerConfig::new(dir.path()).with_pool_size(4));
    let ctx = LedgerContext::open(&config).expect("open ledger");
    TestLedger { ctx, _dir: dir }
}

pub async fn brand(ledger: &TestLedger, name: &str) -> Brand {
    ledger.brand_service.create_brand(name).await.expect("create brand")
}

pub async fn vendor(ledger: &TestLedger, name: &str, currency: &str) -> Vendor {
    ledger
        .vendor_service
        .create_vendor(NewVendor::new(name, currency))
        .await
        .expect("create vendor")
}

pub async fn product(ledger: &TestLedger, name: &str, brand: &Brand) -> Product {
    ledger
        .product_service
        .create_product(NewProduct::new(name, &brand.id))
        .await
        .expect("create product")
}
