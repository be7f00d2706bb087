//! Sample data backing every screen.
//!
//! The built-in catalog is embedded from `data/catalog.json`. A file with the
//! same shape can replace it at startup (`MOCKEX_CATALOG`).

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{EarnProduct, Holding, MarketListing, MarketMover, WalletTransaction};

const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// All static records the application renders.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub coins: Vec<MarketListing>,
    #[serde(default)]
    pub movers: Vec<MarketMover>,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
    #[serde(default)]
    pub earn_products: Vec<EarnProduct>,
}

impl Catalog {
    /// Parses the embedded sample catalog.
    ///
    /// # Errors
    ///
    /// Returns [`MockexError::Json`](crate::MockexError::Json) if the
    /// embedded document is malformed.
    pub fn sample() -> crate::Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or lists no
    /// coins.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::MockexError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            coins = catalog.coins.len(),
            products = catalog.earn_products.len(),
            "loaded catalog override"
        );
        Ok(catalog)
    }

    /// Loads `path` when given, otherwise the embedded sample.
    pub fn load_or_sample(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::sample(),
        }
    }

    fn from_json(json: &str) -> crate::Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.coins.is_empty() {
            return Err(crate::MockexError::Config(
                "catalog must list at least one coin".to_string(),
            ));
        }
        Ok(catalog)
    }

    /// Reference price of `symbol` from the coin listings.
    pub fn price_of(&self, symbol: &str) -> Option<Decimal> {
        self.coins
            .iter()
            .find(|c| c.symbol.eq_ignore_ascii_case(symbol))
            .map(|c| c.price)
    }

    /// Holding for `symbol`, if the wallet has one.
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn embedded_sample_parses() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.coins.len(), 5);
        assert_eq!(catalog.holdings.len(), 4);
        assert_eq!(catalog.transactions.len(), 4);
        assert_eq!(catalog.earn_products.len(), 4);
        assert_eq!(catalog.movers.len(), 3);
    }

    #[test]
    fn price_lookup_is_case_insensitive() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.price_of("btc"), Some(dec!(60500.75)));
        assert_eq!(catalog.price_of("DOGE"), None);
    }

    #[test]
    fn holding_lookup() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.holding("USDT").map(|h| h.balance), Some(dec!(2500)));
    }

    #[test]
    fn rejects_empty_coin_list() {
        let err = Catalog::from_json(r#"{ "coins": [] }"#).unwrap_err();
        assert!(err.to_string().contains("at least one coin"));
    }
}
