//! keyz-tui - Keyboard shortcut overlay for the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging and load the keybinding document.
//! - Run the fixed-rate frame loop.
//!
//! Does NOT handle:
//! - Layout or scroll arithmetic (see `keyz_tui::layout` and `keyz_tui::scroll`).
//! - Document parsing (see `keyz_config`).
//!
//! Invariants:
//! - The document is loaded once, before the terminal enters raw mode.
//! - The TUI enters raw mode and alternate screen on startup.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Input is polled only for the remainder of each frame's time budget.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event;

use keyz_config::constants::TARGET_FPS;
use keyz_tui::App;
use keyz_tui::cli::Cli;
use keyz_tui::runtime::{config::load_startup_config, logging::init_file_logging, terminal};
use keyz_tui::ui::Summary;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must live for entire main() duration to ensure logs are flushed.
    // Without a writable log dir the overlay still runs, just unlogged.
    let _log_guard = init_file_logging(&cli.log_dir);

    let (config_path, outcome) = load_startup_config(&cli);

    if cli.check {
        let summary = Summary::from_config(&outcome.config);
        println!(
            "{}: {}, {} ({})",
            config_path.display(),
            summary.programs_label(),
            summary.keybinds_label(),
            outcome.source
        );
        return Ok(());
    }

    let mut app = App::new(outcome.config);

    let (mut terminal, _terminal_guard) = terminal::setup(cli.no_mouse)?;

    let frame_budget = Duration::from_secs(1) / TARGET_FPS as u32;

    // Main frame loop
    while !app.should_quit {
        let frame_start = Instant::now();
        terminal.draw(|f| app.render(f))?;

        loop {
            let remaining = frame_budget.saturating_sub(frame_start.elapsed());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            app.handle_event(&event::read()?);
            if app.should_quit {
                break;
            }
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
