//! Wallet tab: holdings, allocation and transaction history.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use rust_decimal::prelude::ToPrimitive;

use crate::models::wallet::{self, TransactionStatus};
use crate::tui::app::{App, Mode};

use super::frame_chrome;

/// Renders the Wallet tab.
pub fn render(frame: &mut Frame, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[Tab]next field [Enter]withdraw [Esc]cancel",
        Mode::Confirm => "[c]copy address [Esc]close",
        Mode::Normal => "[j/k]select [d]deposit [w]withdraw [Tab]switch tab [q]quit",
    };
    let content = frame_chrome(frame, app, help);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[0]);

    render_holdings(frame, top[0], app);
    render_allocation(frame, top[1], app);
    render_transactions(frame, layout[1], app);
}

fn render_holdings(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Assets  ${:.2} ", app.total_balance()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("  {:<18} {:>14} {:>14}", "Asset", "Balance", "Value (USD)"),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (i, h) in app.catalog.holdings.iter().enumerate() {
        let selected = i == app.wallet_index;
        let style = if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!(
                "{} {:<18} {:>14} {:>14.2}",
                if selected { ">" } else { " " },
                format!("{} {}", h.symbol, h.name),
                h.balance.normalize(),
                h.fiat_value
            ),
            style,
        ));
    }

    if app.catalog.holdings.is_empty() {
        lines.push(Line::from(Span::styled(
            "No assets",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_allocation(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Allocation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shares = wallet::allocation(&app.catalog.holdings);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); shares.len()])
        .split(inner);

    for ((symbol, pct), row) in shares.iter().zip(rows.iter()) {
        let ratio = (pct.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(ratio)
            .label(format!("{symbol} {pct:.1}%"));
        frame.render_widget(gauge, *row);
    }
}

fn render_transactions(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Transaction History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "{:<12} {:<12} {:<14} {:<18} {:<10}",
            "Type", "Asset", "Amount", "Date", "Status"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for tx in app
        .catalog
        .transactions
        .iter()
        .take(inner.height.saturating_sub(1) as usize)
    {
        let status_color = match tx.status {
            TransactionStatus::Completed => Color::Green,
            TransactionStatus::Pending => Color::Yellow,
            TransactionStatus::Failed => Color::Red,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12} ", tx.kind.label())),
            Span::raw(format!("{:<12} ", tx.asset)),
            Span::raw(format!("{:<14} ", tx.amount)),
            Span::raw(format!("{:<18} ", tx.date)),
            Span::styled(
                format!("{:<10}", tx.status.to_string()),
                Style::default().fg(status_color),
            ),
        ]));
    }

    if lines.len() == 1 {
        lines.push(Line::from(Span::styled(
            "No transactions",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
