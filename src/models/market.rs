//! Markets list models: listings, filtering and sorting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the markets table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    /// 24h change in percent.
    pub change_24h: Decimal,
    /// Market capitalization in USD.
    pub market_cap: Decimal,
    /// 24h traded volume in USD.
    pub volume_24h: Decimal,
    #[serde(default)]
    pub is_favorite: bool,
}

impl MarketListing {
    /// Case-insensitive match of `term` against name or symbol.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.symbol.to_lowercase().contains(&term)
    }
}

/// A highlighted pair on the home dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketMover {
    pub pair: String,
    pub price: Decimal,
    pub change_pct: Decimal,
    /// 24h volume in the quote asset.
    pub volume: Decimal,
}

/// Which listings the markets table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarketScope {
    #[default]
    All,
    Favorites,
}

impl MarketScope {
    pub fn toggle(&mut self) {
        *self = match self {
            MarketScope::All => MarketScope::Favorites,
            MarketScope::Favorites => MarketScope::All,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketScope::All => "All",
            MarketScope::Favorites => "Favorites",
        }
    }
}

/// Sort order for the markets table. Every key sorts descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Listed,
    MarketCap,
    PriceChange,
    Volume,
}

impl SortKey {
    /// Advances to the next sort key, wrapping around.
    pub fn cycle(&mut self) {
        *self = match self {
            SortKey::Listed => SortKey::MarketCap,
            SortKey::MarketCap => SortKey::PriceChange,
            SortKey::PriceChange => SortKey::Volume,
            SortKey::Volume => SortKey::Listed,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Listed => "Default",
            SortKey::MarketCap => "Market Cap",
            SortKey::PriceChange => "Price Change",
            SortKey::Volume => "Volume",
        }
    }
}

/// Returns the listings visible for a search term, scope and sort key.
///
/// Sorting is stable, so ties keep catalog order.
pub fn visible_listings<'a>(
    listings: &'a [MarketListing],
    term: &str,
    scope: MarketScope,
    sort: SortKey,
) -> Vec<&'a MarketListing> {
    let mut rows: Vec<&MarketListing> = listings
        .iter()
        .filter(|l| l.matches(term))
        .filter(|l| scope == MarketScope::All || l.is_favorite)
        .collect();

    match sort {
        SortKey::Listed => {}
        SortKey::MarketCap => rows.sort_by(|a, b| b.market_cap.cmp(&a.market_cap)),
        SortKey::PriceChange => rows.sort_by(|a, b| b.change_24h.cmp(&a.change_24h)),
        SortKey::Volume => rows.sort_by(|a, b| b.volume_24h.cmp(&a.volume_24h)),
    }

    rows
}

/// Flips the favorite flag of the listing with `id`. Unknown ids are ignored.
///
/// Returns the new flag value when a listing was found.
pub fn toggle_favorite(listings: &mut [MarketListing], id: &str) -> Option<bool> {
    let listing = listings.iter_mut().find(|l| l.id == id)?;
    listing.is_favorite = !listing.is_favorite;
    Some(listing.is_favorite)
}

/// Formats a USD magnitude compactly (`1.19T`, `366.2B`, `15.2M`).
pub fn compact_usd(value: Decimal) -> String {
    let units = [
        (Decimal::from(1_000_000_000_000u64), "T"),
        (Decimal::from(1_000_000_000u64), "B"),
        (Decimal::from(1_000_000u64), "M"),
        (Decimal::from(1_000u64), "K"),
    ];
    for (scale, suffix) in units {
        if value.abs() >= scale {
            return format!("{}{suffix}", (value / scale).round_dp(2).normalize());
        }
    }
    value.round_dp(2).normalize().to_string()
}
