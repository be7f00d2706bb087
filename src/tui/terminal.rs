//! Terminal setup and teardown utilities.
//!
//! The TUI owns the terminal between [`setup_terminal`] and
//! [`restore_terminal`]. A panic in between would leave the shell in raw
//! mode on the alternate screen, so setup also installs a panic hook that
//! undoes both before the default hook prints the message.

use std::io::{self, IsTerminal, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{MockexError, Result};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal in raw mode on the alternate screen.
///
/// # Errors
///
/// Returns [`MockexError::Io`] if stdout is not a TTY or the terminal
/// cannot be switched. Raw mode is undone before returning a late failure.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(MockexError::Io(
            "mockex needs an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode().map_err(io_error("failed to enable raw mode"))?;
    install_panic_hook();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("mockex")).map_err(|e| {
        let _ = disable_raw_mode();
        io_error("failed to enter alternate screen")(e)
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        io_error("failed to create terminal")(e)
    })
}

/// Leaves the alternate screen and restores cooked mode.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(io_error("failed to disable raw mode"))?;
    leave_screen(terminal.backend_mut()).map_err(io_error("failed to leave alternate screen"))?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// Chains a hook that restores the terminal in front of the current one.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        tracing::error!(%info, "panic while the TUI was active");
        previous(info);
    }));
}

/// Writes the sequences that return to the main screen with a visible cursor.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

fn io_error(context: &'static str) -> impl Fn(io::Error) -> MockexError {
    move |e| MockexError::Io(format!("{context}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_screen_shows_cursor_on_main_screen() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.ends_with("\x1b[?25h"));
    }

    #[test]
    fn io_errors_carry_their_context() {
        let err = io_error("failed to draw")(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "io error: failed to draw: broken pipe");
    }
}
