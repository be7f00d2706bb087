//! Catalog loading tests against fixture files.

use std::io::Write;
use std::path::PathBuf;

use rust_decimal_macros::dec;

use mockex::MockexError;
use mockex::catalog::Catalog;

/// Helper to get the path to test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_sample_catalog_is_complete() {
    let catalog = Catalog::sample().expect("embedded catalog parses");

    assert_eq!(catalog.coins.len(), 5);
    assert_eq!(catalog.movers.len(), 3);
    assert_eq!(catalog.holdings.len(), 4);
    assert_eq!(catalog.transactions.len(), 4);
    assert_eq!(catalog.earn_products.len(), 4);
    assert_eq!(catalog.price_of("btc"), Some(dec!(60500.75)));
}

#[test]
fn test_minimal_override_fills_defaults() {
    let path = fixtures_dir().join("catalog_minimal.json");
    let catalog = Catalog::load(&path).expect("minimal catalog loads");

    assert_eq!(catalog.coins[0].symbol, "DOGE");
    assert!(!catalog.coins[0].is_favorite);
    assert!(catalog.movers.is_empty());
    assert!(catalog.earn_products.is_empty());
    assert_eq!(
        catalog.holding("doge").map(|h| h.balance),
        Some(dec!(1000))
    );
}

#[test]
fn test_catalog_without_coins_is_rejected() {
    let path = fixtures_dir().join("catalog_no_coins.json");
    let result = Catalog::load(&path);

    assert!(matches!(result, Err(MockexError::Config(_))));
}

#[test]
fn test_malformed_catalog_is_json_error() {
    let path = fixtures_dir().join("catalog_malformed.json");
    let result = Catalog::load(&path);

    assert!(matches!(result, Err(MockexError::Json(_))));
}

#[test]
fn test_missing_catalog_file_is_config_error() {
    let path = fixtures_dir().join("nonexistent.json");
    let err = Catalog::load(&path).expect_err("missing file fails");

    assert!(matches!(err, MockexError::Config(_)));
    assert!(err.to_string().contains("nonexistent.json"));
}

#[test]
fn test_load_or_sample_prefers_override() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"coins":[{{"id":"ada","name":"Cardano","symbol":"ADA","price":"0.45","change_24h":"3.1","market_cap":"16000000000","volume_24h":"400000000","is_favorite":true}}]}}"#
    )
    .expect("write catalog");

    let catalog = Catalog::load_or_sample(Some(file.path())).expect("override loads");
    assert_eq!(catalog.coins.len(), 1);
    assert!(catalog.coins[0].is_favorite);

    let sample = Catalog::load_or_sample(None).expect("sample loads");
    assert_eq!(sample.coins.len(), 5);
}
