//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tokio::sync::mpsc;

use crate::models::{OrderKind, OrderSide};

use super::app::{App, Dialog, Focus, Mode, Tab};
use super::input::TextInput;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state. Quitting is a key press
/// (`q` or Ctrl-C) handled in [`update`].
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) {
    let Message::Input(event) = message;
    handle_input(app, event);
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {}
        Event::Tick => app.clear_stale_toasts(),
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
        Mode::Confirm => handle_confirm_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Tab navigation
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.previous_tab();
            } else {
                app.next_tab();
            }
        }
        KeyCode::BackTab => app.previous_tab(),

        _ => match app.current_tab() {
            Tab::Home => handle_home_keys(app, key),
            Tab::Markets => handle_markets_keys(app, key),
            Tab::Trade => handle_trade_keys(app, key),
            Tab::Wallet => handle_wallet_keys(app, key),
            Tab::Earn => handle_earn_keys(app, key),
        },
    }
}

/// Quick actions on the Home tab.
fn handle_home_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => app.select_tab(Tab::Trade),
        KeyCode::Char('m') => app.select_tab(Tab::Markets),
        KeyCode::Char('w') => app.select_tab(Tab::Wallet),
        KeyCode::Char('d') => {
            app.select_tab(Tab::Wallet);
            app.open_deposit();
        }
        KeyCode::Char('e') => app.select_tab(Tab::Earn),
        _ => {}
    }
}

/// Handles keys for the Markets tab.
fn handle_markets_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.market_index + 1 < app.visible_markets().len() {
                app.market_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.market_index = app.market_index.saturating_sub(1);
        }
        KeyCode::Char('/') => {
            app.focus = Focus::MarketSearch;
            app.mode = Mode::Insert;
        }
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char('v') => {
            app.market_scope.toggle();
            app.clamp_market_index();
        }
        KeyCode::Char('o') => app.market_sort.cycle(),
        KeyCode::Enter => app.open_selected_market(),
        _ => {}
    }
}

/// Handles keys for the Trade tab.
fn handle_trade_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('m') => app.set_order_kind(OrderKind::Market),
        KeyCode::Char('l') => app.set_order_kind(OrderKind::Limit),

        // Spot/futures switch and leverage steps
        KeyCode::Char('f') => app.toggle_trade_mode(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_leverage(true),
        KeyCode::Char('-') => app.adjust_leverage(false),

        // Field focus; price is only reachable for limit orders
        KeyCode::Char('j') | KeyCode::Down => {
            if app.order_flow.draft().kind == OrderKind::Limit {
                app.focus = Focus::Price;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.focus = Focus::Amount,

        KeyCode::Char('i') | KeyCode::Enter => {
            if app.focus.is_text_input() {
                app.mode = Mode::Insert;
            }
        }

        KeyCode::Char('b') => app.submit_order(OrderSide::Buy),
        KeyCode::Char('s') => app.submit_order(OrderSide::Sell),
        KeyCode::Char('B') => app.order_flow.prepare_side(OrderSide::Buy, &mut app.toasts),
        KeyCode::Char('S') => app.order_flow.prepare_side(OrderSide::Sell, &mut app.toasts),
        _ => {}
    }
}

/// Handles keys for the Wallet tab.
fn handle_wallet_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.wallet_index + 1 < app.catalog.holdings.len() {
                app.wallet_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.wallet_index = app.wallet_index.saturating_sub(1);
        }
        KeyCode::Char('d') => app.open_deposit(),
        KeyCode::Char('w') => app.open_withdraw(),
        _ => {}
    }
}

/// Handles keys for the Earn tab.
fn handle_earn_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.earn_index + 1 < app.visible_products().len() {
                app.earn_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.earn_index = app.earn_index.saturating_sub(1);
        }
        KeyCode::Char('t') => app.cycle_earn_filter(),
        KeyCode::Enter => app.open_invest(),
        _ => {}
    }
}

/// Returns the text input that owns the current focus.
fn focused_input(app: &mut App) -> Option<&mut TextInput> {
    match app.focus {
        Focus::MarketSearch => Some(&mut app.market_search),
        Focus::Amount => Some(&mut app.amount_input),
        Focus::Price => Some(&mut app.price_input),
        Focus::WithdrawAmount => Some(&mut app.withdraw_amount),
        Focus::WithdrawAddress => Some(&mut app.withdraw_address),
        Focus::InvestAmount => Some(&mut app.invest_amount),
        _ => None,
    }
}

/// Handles keys in insert mode (text input).
fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.dialog.is_some() {
                app.close_dialog();
            } else {
                app.mode = Mode::Normal;
            }
            return;
        }
        KeyCode::Enter => {
            match app.dialog {
                Some(Dialog::Withdraw { .. }) => app.submit_withdraw(),
                Some(Dialog::Invest { .. }) => app.submit_invest(),
                _ => app.mode = Mode::Normal,
            }
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::WithdrawAmount => Focus::WithdrawAddress,
                Focus::WithdrawAddress => Focus::WithdrawAmount,
                other => other,
            };
            return;
        }
        _ => {}
    }

    let Some(input) = focused_input(app) else {
        app.mode = Mode::Normal;
        return;
    };
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return,
    }

    match app.focus {
        Focus::Amount | Focus::Price => app.push_trade_input(),
        Focus::MarketSearch => app.clamp_market_index(),
        _ => {}
    }
}

/// Handles keys in confirm mode (dialogs).
fn handle_confirm_mode(app: &mut App, key: KeyEvent) {
    if app.order_flow.is_awaiting_confirmation() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_order(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_order(),
            _ => {}
        }
        return;
    }

    let is_deposit = matches!(app.dialog, Some(Dialog::Deposit { .. }));
    match key.code {
        KeyCode::Char('c') if is_deposit => app.copy_deposit_address(),
        KeyCode::Char('n') | KeyCode::Esc | KeyCode::Enter => app.close_dialog(),
        _ => {}
    }
}
