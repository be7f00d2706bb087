//! Home tab: balance overview, top movers and quick actions.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{change_color, frame_chrome};
use crate::models::market::compact_usd;
use crate::tui::app::{App, Mode};

/// Renders the Home tab.
pub fn render(frame: &mut Frame, app: &App) {
    let help = match app.mode {
        Mode::Confirm => "[c]copy address [Esc]close",
        _ => "[t]trade [m]markets [d]deposit [w]wallet [e]earn [Tab]switch tab [q]quit",
    };
    let content = frame_chrome(frame, app, help);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance
            Constraint::Min(5),    // Movers
            Constraint::Length(3), // Quick actions
        ])
        .split(content);

    render_balance(frame, layout[0], app);
    render_movers(frame, layout[1], app);
    render_quick_actions(frame, layout[2]);
}

fn render_balance(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Estimated Balance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            format!("${:.2}", app.total_balance()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} assets", app.catalog.holdings.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_movers(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Top Movers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("{:<12} {:>14} {:>9} {:>10}", "Pair", "Price", "24h", "Volume"),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for mover in app
        .catalog
        .movers
        .iter()
        .take(inner.height.saturating_sub(1) as usize)
    {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12} ", mover.pair)),
            Span::raw(format!("{:>14} ", mover.price.normalize())),
            Span::styled(
                format!("{:>+8.2}% ", mover.change_pct),
                Style::default().fg(change_color(mover.change_pct)),
            ),
            Span::raw(format!("{:>10}", compact_usd(mover.volume))),
        ]));
    }

    if lines.len() == 1 {
        lines.push(Line::from(Span::styled(
            "No movers",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" [t] ", key),
        Span::raw("Trade  "),
        Span::styled(" [d] ", key),
        Span::raw("Deposit  "),
        Span::styled(" [m] ", key),
        Span::raw("Markets  "),
        Span::styled(" [e] ", key),
        Span::raw("Earn"),
    ]);
    let block = Block::default()
        .title(" Quick Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
