//! Order entry models.
//!
//! An [`OrderDraft`] is the unvalidated order the user is composing on the
//! Trade tab. Amount and price are kept as the raw text typed so far; they
//! are parsed only when a submit is requested.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    /// Lower-case verb used in confirmation descriptions.
    pub fn verb(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }

    /// Capitalized label used in titles and buttons.
    pub fn label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }

    /// Past tense used in execution notifications.
    pub fn past_tense(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Bought",
            OrderSide::Sell => "Sold",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// How the order should be executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Execute immediately at the best available price.
    #[default]
    Market,
    /// Execute only at the given price or better.
    Limit,
}

impl OrderKind {
    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Market => "market",
            OrderKind::Limit => "limit",
        }
    }
}

/// Editable field of an [`OrderDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Amount(String),
    Price(String),
    Kind(OrderKind),
    Side(OrderSide),
}

/// The in-progress order being composed.
///
/// The default value is the empty draft: amount unset, price unset, market
/// kind, buy side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub amount: String,
    pub price: String,
    pub kind: OrderKind,
    pub side: OrderSide,
}

impl OrderDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one field. No validation happens here.
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Amount(v) => self.amount = v,
            DraftField::Price(v) => self.price = v,
            DraftField::Kind(k) => self.kind = k,
            DraftField::Side(s) => self.side = s,
        }
    }

    /// Returns whether the draft equals its initial state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty_market_buy() {
        let draft = OrderDraft::new();
        assert!(draft.amount.is_empty());
        assert!(draft.price.is_empty());
        assert_eq!(draft.kind, OrderKind::Market);
        assert_eq!(draft.side, OrderSide::Buy);
        assert!(draft.is_empty());
    }

    #[test]
    fn set_accepts_invalid_intermediate_text() {
        let mut draft = OrderDraft::new();
        draft.set(DraftField::Amount("0.".to_string()));
        draft.set(DraftField::Price("-".to_string()));
        assert_eq!(draft.amount, "0.");
        assert_eq!(draft.price, "-");
        assert!(!draft.is_empty());
    }

    #[test]
    fn side_and_kind_are_independent() {
        let mut draft = OrderDraft::new();
        draft.set(DraftField::Side(OrderSide::Sell));
        draft.set(DraftField::Kind(OrderKind::Limit));
        assert_eq!(draft.side, OrderSide::Sell);
        assert_eq!(draft.kind, OrderKind::Limit);
    }

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OrderSide::Sell).unwrap(), "\"sell\"");
        assert_eq!(
            serde_json::from_str::<OrderKind>("\"limit\"").unwrap(),
            OrderKind::Limit
        );
    }
}
