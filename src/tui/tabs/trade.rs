//! Trade tab: simulated order book, order form and recent executions.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::{change_color, frame_chrome};
use crate::book::PriceLevel;
use crate::models::{Leverage, OrderKind, OrderSide, RiskLevel, TradeMode};
use crate::tui::app::{App, Focus, Mode};
use crate::tui::input::TextInput;

/// Width of the depth bars in the order book.
const BAR_WIDTH: usize = 15;

/// Renders the Trade tab.
pub fn render(frame: &mut Frame, app: &App) {
    let help = match (app.mode, app.trade_mode) {
        (Mode::Insert, _) => "[Esc]normal [Enter]done",
        (Mode::Confirm, _) => "[y]confirm [n]cancel",
        (Mode::Normal, TradeMode::Spot) => {
            "[f]futures [m]market [l]limit [j/k]field [i]edit [b]buy [s]sell [B/S]prepare side [Tab]switch tab [q]quit"
        }
        (Mode::Normal, TradeMode::Futures) => {
            "[f]spot [+/-]leverage [m]market [l]limit [j/k]field [i]edit [b]long [s]short [Tab]switch tab [q]quit"
        }
    };
    let content = frame_chrome(frame, app, help);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Ticker header
            Constraint::Min(12),   // Order book + order form
            Constraint::Length(7), // Recent executions
        ])
        .split(content);

    render_ticker_header(frame, layout[0], app);

    let main_content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    render_orderbook(frame, main_content[0], app);
    render_order_form(frame, main_content[1], app);
    render_executions(frame, layout[2], app);
}

fn render_ticker_header(frame: &mut Frame, area: Rect, app: &App) {
    let pair = app.order_flow.pair();
    let listing = app
        .catalog
        .coins
        .iter()
        .find(|c| c.symbol.eq_ignore_ascii_case(pair.base()));

    let mut spans = vec![Span::styled(
        format!(" {pair} "),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    match listing {
        Some(l) => {
            let arrow = if l.change_24h >= Decimal::ZERO { "▲" } else { "▼" };
            spans.extend([
                Span::styled(arrow, Style::default().fg(change_color(l.change_24h))),
                Span::styled(
                    format!(" {} ", l.price.normalize()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:+.2}%", l.change_24h),
                    Style::default().fg(change_color(l.change_24h)),
                ),
            ]);
        }
        None => spans.push(Span::styled(" -- ", Style::default().fg(Color::DarkGray))),
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_orderbook(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Book ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let book = &app.order_book;
    let mut lines: Vec<Line> = Vec::new();

    // Reserve 3 lines for: ASK header, spread, BID header
    let available_height = inner.height.saturating_sub(3) as usize;
    let levels_per_side = (available_height / 2).max(1);
    let max_qty = book.max_qty();

    lines.push(Line::from(Span::styled(
        "ASK",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));

    // Lowest ask at the bottom, closest to the spread
    for ask in book.asks.iter().take(levels_per_side).rev() {
        lines.push(level_line(ask, max_qty, Color::Red));
    }

    if let (Some(best_bid), Some(spread)) = (book.bids.first(), book.spread()) {
        let spread_pct = spread
            .checked_div(best_bid.price)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("─── Spread: {} ({:.3}%) ───", spread.normalize(), spread_pct),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        "BID",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    for bid in book.bids.iter().take(levels_per_side) {
        lines.push(level_line(bid, max_qty, Color::Green));
    }

    if book.bids.is_empty() && book.asks.is_empty() {
        lines.push(Line::from(Span::styled(
            "No data",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn level_line(level: &PriceLevel, max_qty: Decimal, color: Color) -> Line<'static> {
    let bar_len = (level.qty / max_qty * Decimal::from(BAR_WIDTH as u64))
        .round()
        .to_usize()
        .unwrap_or(1)
        .clamp(1, BAR_WIDTH);

    Line::from(vec![
        Span::styled(
            format!("{:>12} ", level.price.normalize()),
            Style::default().fg(color),
        ),
        Span::raw(format!("{:>8.2} ", level.qty)),
        Span::styled("▒".repeat(bar_len), Style::default().fg(color)),
    ])
}

fn render_order_form(frame: &mut Frame, area: Rect, app: &App) {
    let draft = app.order_flow.draft();
    let pair = app.order_flow.pair();

    let block = Block::default()
        .title(" Place Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let futures = app.trade_mode == TradeMode::Futures;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                           // Spot / Futures
            Constraint::Length(1),                           // Kind selector
            Constraint::Length(3),                           // Amount
            Constraint::Length(3),                           // Price
            Constraint::Length(1),                           // Estimated total
            Constraint::Length(if futures { 6 } else { 0 }), // Leverage
            Constraint::Length(1),                           // Spacer
            Constraint::Length(1),                           // Buy / Sell
            Constraint::Min(0),
        ])
        .split(inner);

    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let unselected = Style::default().fg(Color::White);
    let mode_style = |mode: TradeMode| {
        if app.trade_mode == mode {
            selected
        } else {
            unselected
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Spot ", mode_style(TradeMode::Spot)),
            Span::raw(" "),
            Span::styled(" Futures ", mode_style(TradeMode::Futures)),
            Span::styled("  [f] switch", Style::default().fg(Color::DarkGray)),
        ])),
        rows[0],
    );

    let kind_style = |kind: OrderKind| if draft.kind == kind { selected } else { unselected };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" [m] Market ", kind_style(OrderKind::Market)),
            Span::raw(" "),
            Span::styled(" [l] Limit ", kind_style(OrderKind::Limit)),
        ])),
        rows[1],
    );

    render_field(
        frame,
        rows[2],
        &format!("Amount ({})", pair.base()),
        &app.amount_input,
        app.focus == Focus::Amount,
        app.mode == Mode::Insert,
    );

    if draft.kind == OrderKind::Limit {
        render_field(
            frame,
            rows[3],
            &format!("Price ({})", pair.quote()),
            &app.price_input,
            app.focus == Focus::Price,
            app.mode == Mode::Insert,
        );
    } else {
        let para = Paragraph::new(Span::styled(
            " Executes at the best available price",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(para, rows[3]);
    }

    let total = estimated_total(app);
    let total_text = match total {
        Some(t) => format!(" Total ≈ {:.2} {}", t, pair.quote()),
        None => " Total ≈ --".to_string(),
    };
    frame.render_widget(Paragraph::new(total_text), rows[4]);

    if futures {
        render_leverage(frame, rows[5], app);
    }

    let (buy, buy_bg, sell, sell_bg) = if futures {
        let long = "Open Long".to_string();
        (long, Color::Yellow, "Open Short".to_string(), Color::Magenta)
    } else {
        let buy = format!("{} {}", OrderSide::Buy.label(), pair.base());
        let sell = format!("{} {}", OrderSide::Sell.label(), pair.base());
        (buy, Color::Green, sell, Color::Red)
    };
    let button = |bg: Color| {
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" [b] {buy} "), button(buy_bg)),
            Span::raw("  "),
            Span::styled(format!(" [s] {sell} "), button(sell_bg)),
        ])),
        rows[7],
    );
}

/// Leverage gauge, risk band and notes for the futures form.
fn render_leverage(frame: &mut Frame, area: Rect, app: &App) {
    let leverage = app.leverage;
    let risk_color = match leverage.risk_level() {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::VeryHigh => Color::Red,
    };
    let [gauge_row, risk_row, notes_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(risk_color).bg(Color::DarkGray))
        .ratio(leverage.ratio())
        .label(format!("Leverage {leverage}"));
    frame.render_widget(gauge, gauge_row);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" Risk: "),
            Span::styled(
                leverage.risk_level().label(),
                Style::default().fg(risk_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}x-{}x)", Leverage::MIN, Leverage::MAX),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        risk_row,
    );

    let mut notes = Vec::new();
    if leverage.shows_warning() {
        notes.push(Line::from(Span::styled(
            Leverage::WARNING,
            Style::default().fg(Color::Red),
        )));
    }
    notes.push(Line::from(Span::styled(
        "Futures trading form similar to Spot, with added leverage and position management.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(notes).wrap(Wrap { trim: true }), notes_row);
}

/// Amount times the limit price, or times the mid of the simulated book for
/// market orders.
fn estimated_total(app: &App) -> Option<Decimal> {
    let draft = app.order_flow.draft();
    let amount: Decimal = draft.amount.trim().parse().ok()?;
    let price = match draft.kind {
        OrderKind::Limit => draft.price.trim().parse().ok()?,
        OrderKind::Market => {
            let bid = app.order_book.bids.first()?.price;
            let ask = app.order_book.asks.first()?.price;
            bid.checked_add(ask)? / Decimal::TWO
        }
    };
    // None when the product is outside the Decimal range
    amount.checked_mul(price)
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    insert: bool,
) {
    let border_style = match (focused, insert) {
        (true, true) => Style::default().fg(Color::Yellow),
        (true, false) => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::DarkGray),
    };
    let title = if focused && insert {
        format!(" {label} (INSERT) ")
    } else {
        format!(" {label} ")
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(input.as_str()), inner);

    if focused && insert {
        frame.set_cursor_position((inner.x + input.cursor_column(), inner.y));
    }
}

fn render_executions(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Executed Orders ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "{:<5} {:<12} {:<6} {:<8} {:>14} {:>14}",
            "#", "Pair", "Side", "Type", "Amount", "Price"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for receipt in app
        .executions
        .iter()
        .rev()
        .take(inner.height.saturating_sub(1) as usize)
    {
        let side_color = match receipt.side {
            OrderSide::Buy => Color::Green,
            OrderSide::Sell => Color::Red,
        };
        let price = receipt
            .price
            .map(|p| p.normalize().to_string())
            .unwrap_or_else(|| "market".to_string());

        lines.push(Line::from(vec![
            Span::raw(format!("{:<5} ", receipt.sequence)),
            Span::raw(format!("{:<12} ", receipt.pair.to_string())),
            Span::styled(
                format!("{:<6} ", receipt.side.label().to_uppercase()),
                Style::default().fg(side_color),
            ),
            Span::raw(format!("{:<8} ", receipt.kind.label())),
            Span::raw(format!("{:>14} ", receipt.amount.normalize())),
            Span::raw(format!("{:>14}", price)),
        ]));
    }

    if lines.len() == 1 {
        lines.push(Line::from(Span::styled(
            "No executions yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
