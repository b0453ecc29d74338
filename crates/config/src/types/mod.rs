//! Keybinding model types for keyz-ro.
//!
//! Responsibilities:
//! - Define the bounded in-memory model (`Config`, `Program`, `Keybind`).
//! - Enforce capacity limits at insertion time.
//! - Truncate string fields on ingestion.
//!
//! Does NOT handle:
//! - Reading or validating documents (see `loader` module).
//! - Writing the starter document (see `persistence` module).
//!
//! Invariants:
//! - `Config` holds at most `MAX_PROGRAMS` programs.
//! - Each `Program` holds at most `MAX_KEYBINDS` keybinds.
//! - Every stored string is shorter than `MAX_STRING` characters.
//! - Insertion order is display order and is never changed.

mod config;
mod keybind;
mod program;

pub use config::Config;
pub use keybind::Keybind;
pub use program::Program;

use crate::constants::MAX_STRING;

/// Truncates a string field to at most `MAX_STRING - 1` characters.
///
/// Truncation happens on character boundaries so multi-byte text never
/// splits. Shorter input is copied unchanged.
pub fn truncate_field(value: &str) -> String {
    let limit = MAX_STRING - 1;
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}
