//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Tab};
use super::components::dialog;
use super::tabs::{earn, home, markets, trade, wallet};

/// Renders the active tab, then any open dialog on top of it.
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_tab() {
        Tab::Home => home::render(frame, app),
        Tab::Markets => markets::render(frame, app),
        Tab::Trade => trade::render(frame, app),
        Tab::Wallet => wallet::render(frame, app),
        Tab::Earn => earn::render(frame, app),
    }
    dialog::render(frame, app);
}
