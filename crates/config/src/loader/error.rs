//! Error types for document loading.
//!
//! Responsibilities:
//! - Define error variants for top-level loading failures.
//! - Classify failures as I/O or parse failures for the startup fallback.
//!
//! Does NOT handle:
//! - Per-element validation misses (those are skipped, never errors).
//! - Errors writing the starter document (see `persistence::BootstrapError`).
//!
//! Invariants:
//! - File-backed variants include the path for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a keybinding document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a top-level array, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },
}

impl LoadError {
    /// Whether the document was readable but malformed or wrong-shaped.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnArray { .. })
    }

    /// Whether the file could not be opened or read.
    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// The path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::NotAnArray { path, .. } => {
                path
            }
        }
    }
}
