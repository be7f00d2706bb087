//! Tab bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Tab};

/// Renders the tab bar, with a marker on Trade while an order awaits
/// confirmation.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " mockex ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, tab) in app.tabs.iter().enumerate() {
        let style = if i == app.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let pending = *tab == Tab::Trade && app.order_flow.is_awaiting_confirmation();
        let label = if pending {
            format!(" {}* ", tab.title())
        } else {
            format!(" {} ", tab.title())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
