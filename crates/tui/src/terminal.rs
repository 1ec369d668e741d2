//! Terminal setup and teardown.
//!
//! The picker runs in raw mode on the alternate screen with mouse capture
//! enabled. [`restore_terminal`] and the panic hook undo all three.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enables raw mode, enters the alternate screen, and captures the mouse.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use swatch_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// // Use terminal...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Returns the terminal to cooked mode on the main screen and shows the cursor.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal, then runs the previous hook.
///
/// Call once at startup before [`setup_terminal`], so the panic message is
/// printed on a usable screen.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort: the panic message matters more than a restore failure
        let _ = leave(&mut io::stdout());
        original_hook(panic_info);
    }));
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}
