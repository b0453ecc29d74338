//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Config path resolution and startup loading
//! - File logging setup
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `keyz_tui::app` and `keyz_tui::ui`).
//! - Document parsing (see `keyz_config`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Everything here runs once, before the frame loop starts.

pub mod config;
pub mod logging;
pub mod terminal;
