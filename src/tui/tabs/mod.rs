//! One render module per screen.

pub mod earn;
pub mod home;
pub mod markets;
pub mod trade;
pub mod wallet;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use rust_decimal::Decimal;

use crate::tui::app::App;
use crate::tui::components::{status_bar, tab_bar};

/// Draws the tab bar, status bar and help line, returning the content area.
pub(crate) fn frame_chrome(frame: &mut Frame, app: &App, help: &str) -> Rect {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    tab_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, main_layout[3]);

    main_layout[2]
}

/// Green for gains, red for losses.
pub(crate) fn change_color(change: Decimal) -> Color {
    if change >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}
