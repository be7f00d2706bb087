//! Earn catalog models and the invest check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of an earn product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProductType {
    Staking,
    Savings,
    Launchpad,
    #[serde(rename = "Yield Farming")]
    YieldFarming,
}

impl ProductType {
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Staking => "Staking",
            ProductType::Savings => "Savings",
            ProductType::Launchpad => "Launchpad",
            ProductType::YieldFarming => "Yield Farming",
        }
    }
}

/// A staking, savings, launchpad or farming offer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EarnProduct {
    pub id: String,
    pub name: String,
    pub asset: String,
    /// Annual percentage yield.
    pub apy: Decimal,
    /// Term label such as `Flexible` or `30 Days Locked`.
    pub term: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub min_investment: Decimal,
    pub details: String,
    /// Percent of the locked term already elapsed.
    #[serde(default)]
    pub current_progress: Option<u8>,
}

/// Product type filter on the Earn tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EarnFilter {
    #[default]
    All,
    Only(ProductType),
}

impl EarnFilter {
    /// Advances through All, Staking, Savings, Launchpad, Yield Farming.
    pub fn cycle(&mut self) {
        *self = match self {
            EarnFilter::All => EarnFilter::Only(ProductType::Staking),
            EarnFilter::Only(ProductType::Staking) => EarnFilter::Only(ProductType::Savings),
            EarnFilter::Only(ProductType::Savings) => EarnFilter::Only(ProductType::Launchpad),
            EarnFilter::Only(ProductType::Launchpad) => {
                EarnFilter::Only(ProductType::YieldFarming)
            }
            EarnFilter::Only(ProductType::YieldFarming) => EarnFilter::All,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            EarnFilter::All => "All",
            EarnFilter::Only(t) => t.label(),
        }
    }

    pub fn accepts(&self, product: &EarnProduct) -> bool {
        match self {
            EarnFilter::All => true,
            EarnFilter::Only(t) => product.product_type == *t,
        }
    }
}

/// Reason an investment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvestError {
    #[error("Please enter an amount.")]
    MissingAmount,
    #[error("Amount must be positive.")]
    NonPositiveAmount,
    #[error("Minimum investment is {min} {asset}.")]
    BelowMinimum { min: Decimal, asset: String },
}

/// Validates an investment of `amount_text` into `product`.
///
/// Empty text is a missing amount; text that is not a number is treated as
/// a non-positive amount.
pub fn validate_investment(
    product: &EarnProduct,
    amount_text: &str,
) -> Result<Decimal, InvestError> {
    let text = amount_text.trim();
    if text.is_empty() {
        return Err(InvestError::MissingAmount);
    }
    let amount = match text.parse::<Decimal>() {
        Ok(v) if v > Decimal::ZERO => v,
        _ => return Err(InvestError::NonPositiveAmount),
    };
    if amount < product.min_investment {
        return Err(InvestError::BelowMinimum {
            min: product.min_investment.normalize(),
            asset: product.asset.clone(),
        });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usdt_savings() -> EarnProduct {
        EarnProduct {
            id: "usdt-savings".to_string(),
            name: "USDT Savings".to_string(),
            asset: "USDT".to_string(),
            apy: dec!(8.0),
            term: "30 Days Locked".to_string(),
            product_type: ProductType::Savings,
            min_investment: dec!(100),
            details: String::new(),
            current_progress: Some(66),
        }
    }

    #[test]
    fn rejects_empty_then_non_positive_then_below_minimum() {
        let p = usdt_savings();
        assert_eq!(validate_investment(&p, " "), Err(InvestError::MissingAmount));
        assert_eq!(validate_investment(&p, "x"), Err(InvestError::NonPositiveAmount));
        assert_eq!(validate_investment(&p, "-5"), Err(InvestError::NonPositiveAmount));
        let err = validate_investment(&p, "50").unwrap_err();
        assert_eq!(err.to_string(), "Minimum investment is 100 USDT.");
    }

    #[test]
    fn accepts_minimum_exactly() {
        assert_eq!(validate_investment(&usdt_savings(), "100"), Ok(dec!(100)));
    }

    #[test]
    fn filter_cycles_through_every_type() {
        let mut f = EarnFilter::default();
        let mut seen = vec![f.label()];
        for _ in 0..5 {
            f.cycle();
            seen.push(f.label());
        }
        assert_eq!(
            seen,
            ["All", "Staking", "Savings", "Launchpad", "Yield Farming", "All"]
        );
    }

    #[test]
    fn filter_accepts_matching_type_only() {
        let p = usdt_savings();
        assert!(EarnFilter::All.accepts(&p));
        assert!(EarnFilter::Only(ProductType::Savings).accepts(&p));
        assert!(!EarnFilter::Only(ProductType::Staking).accepts(&p));
    }
}
