//! Domain models shared by the screens.
//!
//! Orders, pairs and leverage drive the Trade tab; listings, holdings and earn
//! products are the records the other tabs display.

pub mod earn;
pub mod leverage;
pub mod market;
pub mod order;
pub mod pair;
pub mod wallet;

pub use earn::{EarnProduct, ProductType};
pub use leverage::{Leverage, RiskLevel, TradeMode};
pub use market::{MarketListing, MarketMover};
pub use order::{DraftField, OrderDraft, OrderKind, OrderSide};
pub use pair::{PairError, TradingPair};
pub use wallet::{Holding, WalletTransaction};
