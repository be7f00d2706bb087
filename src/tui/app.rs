//! Application state for the TUI.

use std::collections::VecDeque;
use std::time::Instant;

use rust_decimal::Decimal;

use crate::book::OrderBook;
use crate::catalog::Catalog;
use crate::models::earn::{self, EarnFilter, EarnProduct};
use crate::models::market::{self, MarketListing, MarketScope, SortKey};
use crate::models::wallet::{self, Holding};
use crate::models::{DraftField, Leverage, OrderKind, OrderSide, TradeMode, TradingPair};
use crate::notify::{Notifier, Severity, ToastQueue};
use crate::order_flow::{ExecutionReceipt, OrderFlow};

use super::input::TextInput;

/// Maximum number of simulated executions kept for the wallet view.
const MAX_EXECUTIONS: usize = 50;

/// Quote asset used when a market row opens the Trade tab.
pub const DEFAULT_QUOTE: &str = "USDT";

/// Central application state container.
pub struct App {
    // -- Tab State --
    /// List of available tabs.
    pub tabs: Vec<Tab>,
    /// Index of the currently active tab.
    pub active_tab: usize,

    // -- Data --
    /// Sample records shown by every screen. Favorites are toggled in place.
    pub catalog: Catalog,
    /// Simulated executions, newest last.
    pub executions: VecDeque<ExecutionReceipt>,

    // -- Trade State --
    /// Order entry state machine for the current pair.
    pub order_flow: OrderFlow,
    /// Depth ladder for the current pair.
    pub order_book: OrderBook,
    pub amount_input: TextInput,
    pub price_input: TextInput,
    pub trade_mode: TradeMode,
    /// Only shown and adjustable in futures mode.
    pub leverage: Leverage,

    // -- Markets State --
    pub market_search: TextInput,
    pub market_scope: MarketScope,
    pub market_sort: SortKey,
    /// Selected row among the visible listings.
    pub market_index: usize,

    // -- Wallet State --
    /// Selected holding.
    pub wallet_index: usize,
    pub withdraw_amount: TextInput,
    pub withdraw_address: TextInput,

    // -- Earn State --
    pub earn_filter: EarnFilter,
    /// Selected row among the visible products.
    pub earn_index: usize,
    pub invest_amount: TextInput,

    // -- UI State --
    /// Open wallet or earn dialog. The order confirmation dialog is driven
    /// by `order_flow` instead.
    pub dialog: Option<Dialog>,
    /// Current focus within the active tab.
    pub focus: Focus,
    /// Current input mode.
    pub mode: Mode,
    /// Toast notifications.
    pub toasts: ToastQueue,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the application on the Home tab with `pair` loaded for trading.
    pub fn new(catalog: Catalog, pair: TradingPair) -> Self {
        let order_book = book_for(&catalog, &pair);
        Self {
            tabs: vec![Tab::Home, Tab::Markets, Tab::Trade, Tab::Wallet, Tab::Earn],
            active_tab: 0,

            catalog,
            executions: VecDeque::with_capacity(MAX_EXECUTIONS),

            order_flow: OrderFlow::new(pair),
            order_book,
            amount_input: TextInput::new(),
            price_input: TextInput::new(),
            trade_mode: TradeMode::Spot,
            leverage: Leverage::default(),

            market_search: TextInput::new(),
            market_scope: MarketScope::All,
            market_sort: SortKey::Listed,
            market_index: 0,

            wallet_index: 0,
            withdraw_amount: TextInput::new(),
            withdraw_address: TextInput::new(),

            earn_filter: EarnFilter::All,
            earn_index: 0,
            invest_amount: TextInput::new(),

            dialog: None,
            focus: Focus::Movers,
            mode: Mode::Normal,
            toasts: ToastQueue::new(),

            should_quit: false,
        }
    }

    /// Returns the currently active tab.
    pub fn current_tab(&self) -> Tab {
        self.tabs[self.active_tab]
    }

    /// Switches to the next tab.
    pub fn next_tab(&mut self) {
        self.activate_tab((self.active_tab + 1) % self.tabs.len());
    }

    /// Switches to the previous tab.
    pub fn previous_tab(&mut self) {
        let pos = self
            .active_tab
            .checked_sub(1)
            .unwrap_or(self.tabs.len() - 1);
        self.activate_tab(pos);
    }

    /// Jumps straight to `tab`.
    pub fn select_tab(&mut self, tab: Tab) {
        if let Some(pos) = self.tabs.iter().position(|t| *t == tab) {
            self.activate_tab(pos);
        }
    }

    /// Entering Trade from another tab starts a fresh draft for the same pair.
    fn activate_tab(&mut self, pos: usize) {
        let was_trade = self.current_tab() == Tab::Trade;
        self.active_tab = pos;
        if !was_trade && self.current_tab() == Tab::Trade {
            self.reset_trade_screen();
        }
        self.update_focus_for_tab();
    }

    /// Updates focus when switching tabs.
    fn update_focus_for_tab(&mut self) {
        self.mode = Mode::Normal;
        self.dialog = None;
        self.focus = match self.current_tab() {
            Tab::Home => Focus::Movers,
            Tab::Markets => Focus::MarketList,
            Tab::Trade => Focus::Amount,
            Tab::Wallet => Focus::Holdings,
            Tab::Earn => Focus::Products,
        };
    }

    // -- Trade --

    /// Opens the Trade tab on `pair` with a fresh, empty draft.
    pub fn open_pair(&mut self, pair: TradingPair) {
        tracing::info!(pair = %pair, query = %pair.query_param(), "opening trading screen");
        self.order_flow = OrderFlow::new(pair);
        if self.current_tab() == Tab::Trade {
            self.reset_trade_screen();
        }
        self.select_tab(Tab::Trade);
    }

    /// Empty spot draft, default leverage and a rebuilt book for the current pair.
    fn reset_trade_screen(&mut self) {
        let pair = self.order_flow.pair().clone();
        tracing::debug!(pair = %pair, "resetting order form");
        self.order_book = book_for(&self.catalog, &pair);
        self.order_flow = OrderFlow::new(pair);
        self.trade_mode = TradeMode::Spot;
        self.leverage = Leverage::default();
        self.sync_inputs_from_draft();
    }

    /// Switches the order form between spot and futures.
    pub fn toggle_trade_mode(&mut self) {
        self.trade_mode.toggle();
        tracing::debug!(mode = self.trade_mode.label(), "trade mode changed");
    }

    /// Steps leverage up or down. Ignored on the spot form.
    pub fn adjust_leverage(&mut self, up: bool) {
        if self.trade_mode != TradeMode::Futures {
            return;
        }
        if up {
            self.leverage.increase();
        } else {
            self.leverage.decrease();
        }
    }

    /// Selects market or limit. Leaving limit moves focus off the price field.
    pub fn set_order_kind(&mut self, kind: OrderKind) {
        if self.order_flow.update_field(DraftField::Kind(kind))
            && kind == OrderKind::Market
            && self.focus == Focus::Price
        {
            self.focus = Focus::Amount;
        }
    }

    /// Pushes the focused trade input's text into the draft.
    pub fn push_trade_input(&mut self) {
        let field = match self.focus {
            Focus::Amount => DraftField::Amount(self.amount_input.as_str().to_string()),
            Focus::Price => DraftField::Price(self.price_input.as_str().to_string()),
            _ => return,
        };
        self.order_flow.update_field(field);
    }

    /// Buy or sell button. Enters confirm mode when validation passes.
    pub fn submit_order(&mut self, side: OrderSide) {
        if self.order_flow.submit(side, &mut self.toasts) {
            self.mode = Mode::Confirm;
        }
    }

    /// Confirms the pending order, records the receipt and clears the form.
    pub fn confirm_order(&mut self) {
        if let Some(receipt) = self.order_flow.confirm_and_notify(&mut self.toasts) {
            if self.executions.len() >= MAX_EXECUTIONS {
                self.executions.pop_front();
            }
            self.executions.push_back(receipt);
            self.sync_inputs_from_draft();
            self.focus = Focus::Amount;
        }
        self.mode = Mode::Normal;
    }

    /// Closes the confirmation dialog and keeps the draft.
    pub fn cancel_order(&mut self) {
        self.order_flow.cancel();
        self.mode = Mode::Normal;
    }

    /// Makes the text inputs show what the draft holds.
    fn sync_inputs_from_draft(&mut self) {
        let draft = self.order_flow.draft();
        self.amount_input = TextInput::with_content(&draft.amount);
        self.price_input = TextInput::with_content(&draft.price);
    }

    // -- Markets --

    /// Listings after search, scope and sort are applied.
    pub fn visible_markets(&self) -> Vec<&MarketListing> {
        market::visible_listings(
            &self.catalog.coins,
            self.market_search.as_str(),
            self.market_scope,
            self.market_sort,
        )
    }

    /// Keeps the selected market row inside the visible list.
    pub fn clamp_market_index(&mut self) {
        let len = self.visible_markets().len();
        self.market_index = self.market_index.min(len.saturating_sub(1));
    }

    /// Toggles the favorite flag of the selected listing.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(id) = self
            .visible_markets()
            .get(self.market_index)
            .map(|l| l.id.clone())
        else {
            return;
        };
        market::toggle_favorite(&mut self.catalog.coins, &id);
        self.clamp_market_index();
    }

    /// Opens the selected listing against [`DEFAULT_QUOTE`].
    pub fn open_selected_market(&mut self) {
        let Some(symbol) = self
            .visible_markets()
            .get(self.market_index)
            .map(|l| l.symbol.clone())
        else {
            return;
        };
        match TradingPair::new(&symbol, DEFAULT_QUOTE) {
            Ok(pair) => self.open_pair(pair),
            Err(e) => self.toasts.notify(&e.to_string(), Severity::Error),
        }
    }

    // -- Wallet --

    pub fn selected_holding(&self) -> Option<&Holding> {
        self.catalog.holdings.get(self.wallet_index)
    }

    /// Portfolio value in USD.
    pub fn total_balance(&self) -> Decimal {
        wallet::total_fiat_value(&self.catalog.holdings)
    }

    /// Opens the deposit dialog for the selected holding.
    pub fn open_deposit(&mut self) {
        if let Some(h) = self.selected_holding() {
            self.dialog = Some(Dialog::Deposit {
                symbol: h.symbol.clone(),
                name: h.name.clone(),
            });
            self.mode = Mode::Confirm;
        }
    }

    /// Simulates copying the deposit address.
    pub fn copy_deposit_address(&mut self) {
        if let Some(Dialog::Deposit { symbol, .. }) = &self.dialog {
            tracing::debug!(address = %wallet::deposit_address(symbol), "address copied");
            self.toasts
                .notify("Address copied to clipboard!", Severity::Success);
        }
    }

    /// Opens the withdraw dialog for the selected holding.
    pub fn open_withdraw(&mut self) {
        if let Some(h) = self.selected_holding() {
            self.dialog = Some(Dialog::Withdraw {
                symbol: h.symbol.clone(),
            });
            self.withdraw_amount = TextInput::new();
            self.withdraw_address = TextInput::new();
            self.focus = Focus::WithdrawAmount;
            self.mode = Mode::Insert;
        }
    }

    /// Validates the withdraw dialog and reports the outcome.
    pub fn submit_withdraw(&mut self) {
        let Some(Dialog::Withdraw { symbol }) = &self.dialog else {
            return;
        };
        let Some(holding) = self.catalog.holding(symbol) else {
            return;
        };
        match wallet::validate_withdrawal(
            holding,
            self.withdraw_amount.as_str(),
            self.withdraw_address.as_str(),
        ) {
            Ok(_) => {
                let message = format!("Withdrawal for {} initiated.", holding.symbol);
                self.toasts.notify(&message, Severity::Success);
                self.close_dialog();
            }
            Err(e) => self.toasts.notify(&e.to_string(), Severity::Error),
        }
    }

    // -- Earn --

    /// Products that pass the current type filter.
    pub fn visible_products(&self) -> Vec<&EarnProduct> {
        self.catalog
            .earn_products
            .iter()
            .filter(|p| self.earn_filter.accepts(p))
            .collect()
    }

    /// Advances the type filter and keeps the selection in range.
    pub fn cycle_earn_filter(&mut self) {
        self.earn_filter.cycle();
        let len = self.visible_products().len();
        self.earn_index = self.earn_index.min(len.saturating_sub(1));
    }

    /// Opens the invest dialog for the selected product.
    pub fn open_invest(&mut self) {
        let Some(product_id) = self
            .visible_products()
            .get(self.earn_index)
            .map(|p| p.id.clone())
        else {
            return;
        };
        self.dialog = Some(Dialog::Invest { product_id });
        self.invest_amount = TextInput::new();
        self.focus = Focus::InvestAmount;
        self.mode = Mode::Insert;
    }

    /// Validates the invest dialog and reports the outcome.
    pub fn submit_invest(&mut self) {
        let Some(Dialog::Invest { product_id }) = &self.dialog else {
            return;
        };
        let Some(product) = self
            .catalog
            .earn_products
            .iter()
            .find(|p| &p.id == product_id)
        else {
            return;
        };
        match earn::validate_investment(product, self.invest_amount.as_str()) {
            Ok(amount) => {
                let message = format!(
                    "Successfully invested {} {} in {}!",
                    amount.normalize(),
                    product.asset,
                    product.name
                );
                self.toasts.notify(&message, Severity::Success);
                self.invest_amount = TextInput::new();
                self.close_dialog();
            }
            Err(e) => self.toasts.notify(&e.to_string(), Severity::Error),
        }
    }

    // -- Dialogs --

    /// Closes any wallet or earn dialog and returns focus to the list.
    pub fn close_dialog(&mut self) {
        if self.dialog.take().is_some() {
            self.focus = match self.current_tab() {
                Tab::Earn => Focus::Products,
                _ => Focus::Holdings,
            };
        }
        self.mode = Mode::Normal;
    }

    /// Clears toasts that have outlived their display time.
    pub fn clear_stale_toasts(&mut self) {
        self.toasts.expire(Instant::now());
    }
}

fn book_for(catalog: &Catalog, pair: &TradingPair) -> OrderBook {
    let reference = catalog
        .price_of(pair.base())
        .or_else(|| catalog.price_of("BTC"))
        .unwrap_or(Decimal::ZERO);
    OrderBook::simulated(reference)
}

/// Tab types in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Markets,
    Trade,
    Wallet,
    Earn,
}

impl Tab {
    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Markets => "Markets",
            Tab::Trade => "Trade",
            Tab::Wallet => "Wallet",
            Tab::Earn => "Earn",
        }
    }
}

/// Wallet and earn dialogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Deposit { symbol: String, name: String },
    Withdraw { symbol: String },
    Invest { product_id: String },
}

/// UI focus targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    // Home tab
    #[default]
    Movers,

    // Markets tab
    MarketList,
    MarketSearch,

    // Trade tab
    Amount,
    Price,

    // Wallet tab
    Holdings,
    WithdrawAmount,
    WithdrawAddress,

    // Earn tab
    Products,
    InvestAmount,
}

impl Focus {
    /// Whether this focus target accepts typed text in insert mode.
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Focus::MarketSearch
                | Focus::Amount
                | Focus::Price
                | Focus::WithdrawAmount
                | Focus::WithdrawAddress
                | Focus::InvestAmount
        )
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Confirm,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Confirm => "CONFIRM",
        }
    }
}
