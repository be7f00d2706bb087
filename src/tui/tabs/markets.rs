//! Markets tab: searchable, sortable listing table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::{change_color, frame_chrome};
use crate::models::market::compact_usd;
use crate::tui::app::{App, Focus, Mode};

/// Renders the Markets tab.
pub fn render(frame: &mut Frame, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[Esc]done [Enter]done",
        _ => "[/]search [j/k]move [f]favorite [v]all/favorites [o]sort [Enter]trade [Tab]switch tab [q]quit",
    };
    let content = frame_chrome(frame, app, help);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(content);

    render_search(frame, layout[0], app);
    render_table(frame, layout[1], app);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let is_insert = app.mode == Mode::Insert && app.focus == Focus::MarketSearch;
    let border_style = if is_insert {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = "/ ";
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::DarkGray)),
        Span::raw(app.market_search.as_str()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if is_insert {
        let cursor_x = inner.x + prompt.len() as u16 + app.market_search.cursor_column();
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let listings = app.visible_markets();
    let block = Block::default()
        .title(format!(
            " Markets [{}] sort: {} ({}) ",
            app.market_scope.label(),
            app.market_sort.label(),
            listings.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if listings.is_empty() {
        let para = Paragraph::new(Span::styled(
            "No markets match your search",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    let header = Row::new(["", "Name", "Price", "24h %", "Market Cap", "Volume"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = listings.iter().map(|l| {
        let star = if l.is_favorite { "★" } else { "☆" };
        Row::new(vec![
            Cell::from(star).style(Style::default().fg(Color::Yellow)),
            Cell::from(format!("{} {}", l.symbol, l.name)),
            Cell::from(format!("${}", l.price.normalize())),
            Cell::from(format!("{:+.2}%", l.change_24h))
                .style(Style::default().fg(change_color(l.change_24h))),
            Cell::from(compact_usd(l.market_cap)),
            Cell::from(compact_usd(l.volume_24h)),
        ])
    });

    let widths = [
        Constraint::Length(2),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.market_index));
    frame.render_stateful_widget(table, area, &mut state);
}
