//! Centralized constants for the keyz-ro workspace.
//!
//! This module contains the capacity limits of the keybinding model and
//! the defaults used across crates to avoid magic number duplication.

// =============================================================================
// Model Capacity
// =============================================================================

/// Maximum number of programs kept from a document. Later programs are dropped.
pub const MAX_PROGRAMS: usize = 20;

/// Maximum number of keybinds kept per program. Later keybinds are dropped.
pub const MAX_KEYBINDS: usize = 100;

/// Cap on string fields. Stored strings hold at most `MAX_STRING - 1` characters.
pub const MAX_STRING: usize = 256;

// =============================================================================
// File Locations
// =============================================================================

/// Directory name under the platform configuration directory.
pub const CONFIG_DIR_NAME: &str = "keyz-ro";

/// File name of the keybinding document.
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Default Document
// =============================================================================

/// Program name used by the generated starter document.
pub const DEFAULT_PROGRAM_NAME: &str = "Example Program";

/// Key label used by the generated starter document.
pub const DEFAULT_KEY: &str = "A";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Offset units scrolled per wheel notch (one unit is one terminal row).
pub const SCROLL_SPEED: f32 = 3.0;

/// Wheel notches per PageUp/PageDown key press.
pub const PAGE_SCROLL_STEPS: f32 = 5.0;

/// Target frame rate of the render loop.
pub const TARGET_FPS: u64 = 60;
