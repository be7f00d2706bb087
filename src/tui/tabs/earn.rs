//! Earn tab: product catalog with type filter and details.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::tui::app::{App, Mode};

use super::frame_chrome;

/// Renders the Earn tab.
pub fn render(frame: &mut Frame, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[Enter]invest [Esc]cancel",
        _ => "[t]filter [j/k]select [Enter]invest [Tab]switch tab [q]quit",
    };
    let content = frame_chrome(frame, app, help);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content);

    render_products(frame, columns[0], app);
    render_details(frame, columns[1], app);
}

fn render_products(frame: &mut Frame, area: Rect, app: &App) {
    let products = app.visible_products();
    let block = Block::default()
        .title(format!(" Earn [{}] ", app.earn_filter.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("  {:<26} {:>8} {:<16}", "Product", "APY", "Term"),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (i, p) in products.iter().enumerate() {
        let selected = i == app.earn_index;
        let style = if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:<26} ", if selected { ">" } else { " " }, p.name),
                style,
            ),
            Span::styled(
                format!("{:>7}% ", p.apy.normalize()),
                style.fg(Color::Green),
            ),
            Span::styled(format!("{:<16}", p.term), style),
        ]));
    }

    if products.is_empty() {
        lines.push(Line::from(Span::styled(
            "No products in this category",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let products = app.visible_products();
    let Some(product) = products.get(app.earn_index) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            product.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} · {} · {}",
            product.product_type.label(),
            product.asset,
            product.term
        )),
        Line::from(format!(
            "Minimum: {} {}",
            product.min_investment.normalize(),
            product.asset
        )),
        Line::from(""),
        Line::from(product.details.clone()),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[0]);

    if let Some(progress) = product.current_progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black))
            .percent(u16::from(progress.min(100)))
            .label(format!("{progress}% of term elapsed"));
        frame.render_widget(gauge, rows[1]);
    }
}
