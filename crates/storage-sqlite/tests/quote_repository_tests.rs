//! Quote recording and comparison against a real SQLite file.

mod common;

use chrono::{Duration, TimeZone, Utc};
use pricebook_core::errors::DatabaseError;
use pricebook_core::fx::{FxServiceTrait, NewForexRate};
use pricebook_core::products::ProductServiceTrait;
use pricebook_core::quotes::{ConvertedQuote, NewQuote, QuoteRepositoryTrait, QuoteServiceTrait};
use pricebook_core::vendors::VendorServiceTrait;
use pricebook_core::Error;
use pricebook_storage_sqlite::quotes::QuoteRepository;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_best_quote_picks_lowest_converted_price() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Apple").await;
    let laptop = common::product(&ledger, "MacBook Pro", &brand).await;
    let first = common::vendor(&ledger, "Vendor One", "USD").await;
    let second = common::vendor(&ledger, "Vendor Two", "USD").await;

    ledger
        .quote_service
        .create_quote(NewQuote::new(&first.id, &laptop.id, dec!(5499.99)))
        .await
        .unwrap();
    ledger
        .quote_service
        .create_quote(NewQuote::new(&second.id, &laptop.id, dec!(5299.99)))
        .await
        .unwrap();

    let best = ledger.quote_service.get_best_quote(&laptop.id).unwrap();
    assert_eq!(best.quote.price, dec!(5299.99));
    assert_eq!(best.vendor.name, "Vendor Two");
    assert_eq!(best.product.name, "MacBook Pro");
}

#[tokio::test]
async fn test_created_quote_is_converted_and_joined() {
    let ledger = common::open_ledger();
    ledger
        .fx_service
        .create_rate(NewForexRate::new("EUR", "USD", dec!(1.20)))
        .await
        .unwrap();
    let brand = common::brand(&ledger, "Moog").await;
    let synth = common::product(&ledger, "Matriarch", &brand).await;
    let vendor = common::vendor(&ledger, "Euro Gear", "EUR").await;
    let date = Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap();

    let created = ledger
        .quote_service
        .create_quote(
            NewQuote::new(&vendor.id, &synth.id, dec!(3500.00))
                .dated(date)
                .with_notes("incl. VAT"),
        )
        .await
        .unwrap();

    assert_eq!(created.quote.currency, "EUR");
    assert_eq!(created.quote.conversion_rate, dec!(1.20));
    assert_eq!(created.quote.converted_price, dec!(4200.00));
    assert!(created.quote.converted_price > Decimal::ZERO);
    assert_eq!(created.vendor.id, vendor.id);
    assert_eq!(created.product.id, synth.id);

    let loaded = ledger.quote_service.get_quote(&created.quote.id).unwrap();
    assert_eq!(loaded.quote.price, dec!(3500.00));
    assert_eq!(loaded.quote.quote_date, date);
    assert_eq!(loaded.quote.notes.as_deref(), Some("incl. VAT"));
    assert_eq!(loaded.vendor.name, "Euro Gear");
}

#[tokio::test]
async fn test_converted_price_is_a_snapshot() {
    let ledger = common::open_ledger();
    let fx = &ledger.fx_service;
    fx.create_rate(NewForexRate::new("EUR", "USD", dec!(1.10)))
        .await
        .unwrap();
    let brand = common::brand(&ledger, "Moog").await;
    let synth = common::product(&ledger, "Matriarch", &brand).await;
    let vendor = common::vendor(&ledger, "Euro Gear", "EUR").await;

    let quote = ledger
        .quote_service
        .create_quote(NewQuote::new(&vendor.id, &synth.id, dec!(100)))
        .await
        .unwrap();
    fx.create_rate(
        NewForexRate::new("EUR", "USD", dec!(1.50)).effective_at(Utc::now() + Duration::hours(1)),
    )
    .await
    .unwrap();

    let reloaded = ledger.quote_service.get_quote(&quote.quote.id).unwrap();
    assert_eq!(reloaded.quote.converted_price, dec!(110.00));
}

#[tokio::test]
async fn test_missing_rate_persists_nothing() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Korg").await;
    let synth = common::product(&ledger, "Minilogue", &brand).await;
    let vendor = common::vendor(&ledger, "Tokyo Sound", "JPY").await;

    match ledger
        .quote_service
        .create_quote(NewQuote::new(&vendor.id, &synth.id, dec!(65000)))
        .await
    {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.entity, "Forex rate");
            assert_eq!(e.id, "JPY/USD");
        }
        other => panic!("expected missing rate, got {other:?}"),
    }
    assert_eq!(ledger.quote_service.count_quotes().unwrap(), 0);
}

#[tokio::test]
async fn test_lists_are_isolated_per_product_and_vendor() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Roland").await;
    let juno = common::product(&ledger, "Juno-X", &brand).await;
    let fantom = common::product(&ledger, "Fantom", &brand).await;
    let first = common::vendor(&ledger, "Vendor One", "USD").await;
    let second = common::vendor(&ledger, "Vendor Two", "USD").await;
    let now = Utc::now();

    for (vendor, product, price, days_ago) in [
        (&first, &juno, dec!(1899), 3),
        (&second, &juno, dec!(1799), 2),
        (&first, &fantom, dec!(3999), 1),
        (&first, &juno, dec!(1849), 0),
    ] {
        ledger
            .quote_service
            .create_quote(
                NewQuote::new(&vendor.id, &product.id, price).dated(now - Duration::days(days_ago)),
            )
            .await
            .unwrap();
    }

    let juno_prices: Vec<Decimal> = ledger
        .quote_service
        .list_by_product(&juno.id)
        .unwrap()
        .into_iter()
        .map(|d| d.quote.converted_price)
        .collect();
    assert_eq!(juno_prices, vec![dec!(1799), dec!(1849), dec!(1899)]);

    let first_quotes = ledger.quote_service.list_by_vendor(&first.id).unwrap();
    assert_eq!(first_quotes.len(), 3);
    assert!(first_quotes.iter().all(|d| d.vendor.id == first.id));
    let first_prices: Vec<Decimal> = first_quotes.iter().map(|d| d.quote.price).collect();
    assert_eq!(first_prices, vec![dec!(1849), dec!(3999), dec!(1899)]);

    assert_eq!(ledger.quote_service.list_by_vendor(&second.id).unwrap().len(), 1);
    assert_eq!(ledger.quote_service.list_quotes(2, 0).unwrap().len(), 2);
    assert_eq!(ledger.quote_service.list_quotes(0, 0).unwrap().len(), 4);
}

#[tokio::test]
async fn test_tie_on_price_goes_to_earlier_quote() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Roland").await;
    let juno = common::product(&ledger, "Juno-X", &brand).await;
    let first = common::vendor(&ledger, "Vendor One", "USD").await;
    let second = common::vendor(&ledger, "Vendor Two", "USD").await;
    let now = Utc::now();

    ledger
        .quote_service
        .create_quote(NewQuote::new(&first.id, &juno.id, dec!(1799)).dated(now))
        .await
        .unwrap();
    ledger
        .quote_service
        .create_quote(
            NewQuote::new(&second.id, &juno.id, dec!(1799.00)).dated(now - Duration::days(1)),
        )
        .await
        .unwrap();

    let best = ledger.quote_service.get_best_quote(&juno.id).unwrap();
    assert_eq!(best.vendor.id, second.id);
}

#[tokio::test]
async fn test_best_quote_not_found_cases() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Roland").await;
    let juno = common::product(&ledger, "Juno-X", &brand).await;

    match ledger.quote_service.get_best_quote(&juno.id) {
        Err(Error::NotFound(e)) => assert_eq!(e.entity, "Quote for product"),
        other => panic!("expected no quotes, got {other:?}"),
    }
    match ledger.quote_service.get_best_quote("missing") {
        Err(Error::NotFound(e)) => assert_eq!(e.entity, "Product"),
        other => panic!("expected missing product, got {other:?}"),
    }
}

#[tokio::test]
async fn test_vendor_with_quotes_cannot_be_deleted() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Roland").await;
    let juno = common::product(&ledger, "Juno-X", &brand).await;
    let vendor = common::vendor(&ledger, "Vendor One", "USD").await;
    let quote = ledger
        .quote_service
        .create_quote(NewQuote::new(&vendor.id, &juno.id, dec!(1799)))
        .await
        .unwrap();

    assert!(matches!(
        ledger.vendor_service.delete_vendor(&vendor.id).await,
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));

    ledger.quote_service.delete_quote(&quote.quote.id).await.unwrap();
    ledger.vendor_service.delete_vendor(&vendor.id).await.unwrap();
    assert_eq!(ledger.vendor_service.count_vendors().unwrap(), 0);
}

#[tokio::test]
async fn test_insert_after_reference_row_is_deleted_reports_not_found() {
    let ledger = common::open_ledger();
    let brand = common::brand(&ledger, "Korg").await;
    let minilogue = common::product(&ledger, "Minilogue", &brand).await;
    let vendor = common::vendor(&ledger, "Vendor One", "USD").await;
    let repo = QuoteRepository::new(ledger.pool(), ledger.writer());
    let converted = |vendor_id: &str, product_id: &str| ConvertedQuote {
        vendor_id: vendor_id.to_string(),
        product_id: product_id.to_string(),
        price: dec!(499),
        currency: "USD".to_string(),
        converted_price: dec!(499),
        conversion_rate: Decimal::ONE,
        quote_date: Utc::now(),
        notes: None,
    };

    // Vendor removed after the service validated it.
    ledger.vendor_service.delete_vendor(&vendor.id).await.unwrap();
    match repo.create(converted(&vendor.id, &minilogue.id)).await {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.entity, "Vendor");
            assert_eq!(e.id, vendor.id);
        }
        other => panic!("expected missing vendor, got {other:?}"),
    }

    let other = common::vendor(&ledger, "Vendor Two", "USD").await;
    ledger
        .product_service
        .delete_product(&minilogue.id)
        .await
        .unwrap();
    match repo.create(converted(&other.id, &minilogue.id)).await {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.entity, "Product");
            assert_eq!(e.id, minilogue.id);
        }
        other => panic!("expected missing product, got {other:?}"),
    }
    assert_eq!(ledger.quote_service.count_quotes().unwrap(), 0);
}
