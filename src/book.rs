//! Simulated order book for the Trade tab.
//!
//! The ladder is derived from a reference price only, with fixed size
//! patterns, so every render of the same pair looks the same.

use rust_decimal::Decimal;

/// Number of levels generated on each side.
pub const BOOK_DEPTH: usize = 20;

/// Reference price over the BTC tick of 10, used to scale the tick to
/// other pairs.
const TICK_DIVISOR: u32 = 6050;

/// A single price level in the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: Decimal,
    pub qty: Decimal,
    /// Cumulative quantity from the best level down to this one.
    pub total: Decimal,
}

/// Bids sorted best (highest) first, asks sorted best (lowest) first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Builds a ladder around `reference`.
    ///
    /// The best bid is `reference` rounded down to a whole tick and the best
    /// ask sits one tick above it. A non-positive reference yields an empty
    /// book. A side stops early at the first level whose price would leave
    /// the `Decimal` range.
    pub fn simulated(reference: Decimal) -> Self {
        if reference <= Decimal::ZERO {
            return Self::default();
        }
        let tick = tick_for(reference);
        let Some(best_bid) = (reference / tick).floor().checked_mul(tick) else {
            return Self::default();
        };

        let offset = |i: usize| tick.checked_mul(Decimal::from(i));
        let bids = ladder(|i| best_bid.checked_sub(offset(i)?), 0);
        let asks = ladder(|i| best_bid.checked_add(tick)?.checked_add(offset(i)?), 3);
        Self { bids, asks }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.asks.first()?.price - self.bids.first()?.price)
    }

    /// Largest level size on either side, used to scale depth bars.
    pub fn max_qty(&self) -> Decimal {
        self.bids
            .iter()
            .chain(self.asks.iter())
            .map(|l| l.qty)
            .max()
            .unwrap_or(Decimal::ONE)
    }
}

fn tick_for(reference: Decimal) -> Decimal {
    let tick = (reference / Decimal::from(TICK_DIVISOR)).round_dp(if reference >= Decimal::ONE {
        2
    } else {
        4
    });
    if tick.is_zero() {
        Decimal::new(1, 4)
    } else {
        tick
    }
}

fn ladder(price_at: impl Fn(usize) -> Option<Decimal>, phase: usize) -> Vec<PriceLevel> {
    let mut total = Decimal::ZERO;
    (0..BOOK_DEPTH)
        .map_while(price_at)
        .take_while(|p| *p > Decimal::ZERO)
        .enumerate()
        .map(|(i, price)| {
            // 0.25 .. 4.75 in quarter steps, shuffled by a stride of 7.
            let qty = Decimal::new(25, 2) * Decimal::from(((i + phase) * 7) % 19 + 1);
            total += qty;
            PriceLevel { price, qty, total }
        })
        .collect()
}
