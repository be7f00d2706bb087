//! Modal dialogs drawn over the active tab.
//!
//! The order confirmation comes from the order flow's pending summary; the
//! deposit, withdraw and invest dialogs come from [`App::dialog`].

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{OrderSide, TradeMode, wallet};
use crate::tui::app::{App, Dialog, Focus};
use crate::tui::input::TextInput;

/// Draws whichever dialog is open, if any.
pub fn render(frame: &mut Frame, app: &App) {
    if let Some(pending) = app.order_flow.pending() {
        let accent = match pending.order().side {
            OrderSide::Buy => Color::Green,
            OrderSide::Sell => Color::Red,
        };
        let mut lines = vec![Line::from(pending.description().to_string())];
        if app.trade_mode == TradeMode::Futures {
            lines.push(Line::from(format!(
                "Leverage: {} ({} risk)",
                app.leverage,
                app.leverage.risk_level()
            )));
        }
        lines.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                Span::raw(" confirm   "),
                Span::styled("[n]", Style::default().fg(Color::DarkGray)),
                Span::raw(" cancel"),
            ]),
        ]);
        draw_box(frame, pending.title(), accent, lines, 60, 8);
        return;
    }

    match &app.dialog {
        Some(Dialog::Deposit { symbol, name }) => {
            let lines = vec![
                Line::from(format!("Send only {name} ({symbol}) to this address.")),
                Line::from(""),
                Line::from(Span::styled(
                    wallet::deposit_address(symbol),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[c]copy address [Esc]close",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            draw_box(frame, &format!("Deposit {symbol}"), Color::Cyan, lines, 56, 9);
        }
        Some(Dialog::Withdraw { symbol }) => {
            let available = app
                .catalog
                .holding(symbol)
                .map(|h| h.balance.normalize().to_string())
                .unwrap_or_else(|| "0".to_string());
            let area = draw_box(
                frame,
                &format!("Withdraw {symbol}"),
                Color::Cyan,
                vec![Line::from(format!("Available: {available} {symbol}"))],
                56,
                10,
            );
            let rows = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);
            render_input(
                frame,
                rows[1],
                "Amount",
                &app.withdraw_amount,
                app.focus == Focus::WithdrawAmount,
            );
            render_input(
                frame,
                rows[2],
                "Address",
                &app.withdraw_address,
                app.focus == Focus::WithdrawAddress,
            );
        }
        Some(Dialog::Invest { product_id }) => {
            let Some(product) = app
                .catalog
                .earn_products
                .iter()
                .find(|p| &p.id == product_id)
            else {
                return;
            };
            let area = draw_box(
                frame,
                &format!("Invest in {}", product.name),
                Color::Green,
                vec![
                    Line::from(format!("{}% APY, {}", product.apy, product.term)),
                    Line::from(format!(
                        "Minimum: {} {}",
                        product.min_investment.normalize(),
                        product.asset
                    )),
                ],
                56,
                8,
            );
            let rows = Layout::vertical([Constraint::Length(2), Constraint::Length(3)]).split(area);
            render_input(
                frame,
                rows[1],
                &format!("Amount ({})", product.asset),
                &app.invest_amount,
                true,
            );
        }
        None => {}
    }
}

/// Clears a centered box, draws its border and body, and returns the inner
/// area for callers that add input fields.
fn draw_box(
    frame: &mut Frame,
    title: &str,
    accent: Color,
    lines: Vec<Line>,
    width: u16,
    height: u16,
) -> Rect {
    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    inner
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(input.as_str()), inner);

    if focused {
        frame.set_cursor_position((inner.x + input.cursor_column(), inner.y));
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
