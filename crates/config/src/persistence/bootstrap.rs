//! Starter document generation.
//!
//! Responsibilities:
//! - Build the one-program, one-keybind starter config.
//! - Write it to disk as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Deciding when to bootstrap (see `load_or_bootstrap`).

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_KEY, DEFAULT_PROGRAM_NAME};
use crate::types::{Config, Keybind, Program};

/// Errors that can occur when writing the starter document.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize starter config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The starter config. Its only keybind points the user at `path`.
pub fn default_document(path: &Path) -> Config {
    let mut program = Program::new(DEFAULT_PROGRAM_NAME);
    program.push_keybind(Keybind::new(
        DEFAULT_KEY,
        &format!("Edit the config at {}", path.display()),
    ));

    let mut config = Config::empty();
    config.push_program(program);
    config
}

/// Writes the starter document to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`BootstrapError`] if the parent directory cannot be created or
/// the file cannot be written.
pub fn write_default_document(path: &Path) -> Result<(), BootstrapError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BootstrapError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut document = default_document(path).to_document()?;
    document.push('\n');

    std::fs::write(path, document).map_err(|e| BootstrapError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "Wrote starter config");
    Ok(())
}
