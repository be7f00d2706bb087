//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::notify::Severity;
use crate::tui::app::{App, Mode};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode_style = match app.mode {
        Mode::Normal => Style::default().fg(Color::Black).bg(Color::Cyan),
        Mode::Insert => Style::default().fg(Color::Black).bg(Color::Yellow),
        Mode::Confirm => Style::default().fg(Color::Black).bg(Color::Magenta),
    };

    let toast_span = match app.toasts.latest() {
        Some(toast) => {
            let color = match toast.severity {
                Severity::Info => Color::White,
                Severity::Success => Color::Green,
                Severity::Error => Color::Red,
            };
            Span::styled(format!(" {} ", toast.message), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let left = vec![
        Span::styled(format!(" {} ", app.mode.label()), mode_style),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", app.order_flow.pair()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" ${:.2} ", app.total_balance()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        toast_span,
    ];

    let used: usize = left.iter().map(|s| s.width()).sum();
    let tab_info = format!(" {}/{} ", app.active_tab + 1, app.tabs.len());

    let mut spans = left;
    spans.push(Span::raw(format!(
        "{:>width$}",
        tab_info,
        width = (area.width as usize).saturating_sub(used)
    )));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
