//! Tests for the keybinding document loader.
//!
//! Responsibilities:
//! - Test loading well-formed documents from disk.
//! - Test skipping of invalid program and keybind elements.
//! - Test capacity and truncation limits.
//!
//! Does NOT handle:
//! - Bootstrap-and-retry behavior (tested in persistence).
//!
//! Invariants:
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::io::Write;

use tempfile::NamedTempFile;


/// Writes `content` to a fresh temp file and returns its handle.
pub fn write_document(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
