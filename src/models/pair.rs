//! Trading pair identifier.

use std::fmt;
use std::str::FromStr;

/// Reason a pair identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("expected BASE_QUOTE or BASE/QUOTE, got {0:?}")]
    MissingSeparator(String),
    #[error("asset code {0:?} must be non-empty ASCII alphanumerics")]
    InvalidAsset(String),
}

/// A base/quote asset combination such as BTC/USDT.
///
/// Accepts the query-parameter form (`BTC_USDT`) produced by the markets
/// screen as well as the display form (`BTC/USDT`). Asset codes are
/// upper-cased on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradingPair {
    base: String,
    quote: String,
}

impl TradingPair {
    /// Builds a pair from two asset codes.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidAsset`] if either code is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(base: &str, quote: &str) -> Result<Self, PairError> {
        Ok(Self {
            base: asset_code(base)?,
            quote: asset_code(quote)?,
        })
    }

    /// Base asset, the one whose quantity is traded.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote asset, the one prices are expressed in.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Returns the `BASE_QUOTE` form used when navigating between screens.
    pub fn query_param(&self) -> String {
        format!("{}_{}", self.base, self.quote)
    }
}

fn asset_code(raw: &str) -> Result<String, PairError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PairError::InvalidAsset(raw.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

impl FromStr for TradingPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('_')
            .or_else(|| s.split_once('/'))
            .ok_or_else(|| PairError::MissingSeparator(s.to_string()))?;
        Self::new(base, quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_param_form() {
        let pair: TradingPair = "BTC_USDT".parse().unwrap();
        assert_eq!(pair.base(), "BTC");
        assert_eq!(pair.quote(), "USDT");
        assert_eq!(pair.to_string(), "BTC/USDT");
    }

    #[test]
    fn parses_slash_form_and_uppercases() {
        let pair: TradingPair = "sol/usdt".parse().unwrap();
        assert_eq!(pair.query_param(), "SOL_USDT");
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            "BTCUSDT".parse::<TradingPair>(),
            Err(PairError::MissingSeparator("BTCUSDT".to_string()))
        );
    }

    #[test]
    fn rejects_empty_side() {
        assert!(matches!(
            "_USDT".parse::<TradingPair>(),
            Err(PairError::InvalidAsset(_))
        ));
        assert!(matches!(
            "BTC/".parse::<TradingPair>(),
            Err(PairError::InvalidAsset(_))
        ));
    }

    #[test]
    fn rejects_nested_separator() {
        assert!("BTC_US/DT".parse::<TradingPair>().is_err());
    }
}
