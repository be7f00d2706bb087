use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use mockex::catalog::Catalog;
use mockex::config::fetch_config;
use mockex::tui::event::{self, Message};
use mockex::tui::{App, Tui, render, restore_terminal, setup_terminal};
use mockex::{MockexError, Result};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = fetch_config()?;

    if let Some(path) = &app_config.log_file {
        init_file_logging(path)?;
    }

    let catalog = Catalog::load_or_sample(app_config.catalog_path.as_deref())?;
    let mut app = App::new(catalog, app_config.initial_pair.clone());
    tracing::info!(pair = %app_config.initial_pair, "starting mockex");

    let mut terminal = setup_terminal()?;
    let outcome = run(&mut terminal, &mut app, app_config.tick_ms).await;
    restore_terminal(&mut terminal)?;

    outcome
}

/// Draws and dispatches messages until the app asks to quit.
async fn run(terminal: &mut Tui, app: &mut App, tick_ms: u64) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx, tick_ms);

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| MockexError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        event::update(app, message);
    }

    tracing::info!(executions = app.executions.len(), "shutting down");
    Ok(())
}

/// Sends tracing output to `path`; the terminal belongs to the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| MockexError::Io(format!("failed to open {}: {e}", path.display())))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
