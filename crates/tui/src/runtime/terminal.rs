//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally capturing the mouse.
//! - Ensure terminal state is restored on application exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing (see `ui` module).
//!
//! Invariants / Assumptions:
//! - `TerminalGuard` must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Guard that ensures terminal state is restored on drop.
///
/// This struct captures the terminal state configuration and restores
/// it when dropped, ensuring cleanup happens even during panics.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `no_mouse` - Whether mouse capture was disabled during setup
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}

/// Puts the terminal into TUI mode and returns the ratatui terminal plus its guard.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn setup(no_mouse: bool) -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    // Guard is created before the remaining steps so a failure still restores raw mode.
    let guard = TerminalGuard::new(no_mouse);

    let mut stdout = std::io::stdout();
    let entered = if no_mouse {
        execute!(stdout, EnterAlternateScreen)
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    };
    entered.context("Failed to enter alternate screen")?;

    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok((terminal, guard))
}
