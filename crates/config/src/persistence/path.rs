//! Path helpers for the keybinding document location.
//!
//! Responsibilities:
//! - Determine the standard document path.
//! - Use `directories` crate for platform-appropriate paths.
//! - Create the parent directory when it is missing.
//!
//! Does NOT handle:
//! - Reading or writing the document itself.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the keybinding document.
///
/// - Linux: `~/.config/keyz-ro/config.json`
/// - macOS: `~/Library/Application Support/keyz-ro/config.json`
/// - Windows: `%AppData%\keyz-ro\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Creates the parent directory of `path` if it does not exist yet.
///
/// Idempotent. Failures are logged and otherwise ignored; a missing
/// directory surfaces later as a load failure, which has its own fallback.
pub fn ensure_parent_dir(path: &Path) {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return;
    };
    if let Err(e) = std::fs::create_dir_all(parent) {
        tracing::warn!(
            dir = %parent.display(),
            "Failed to create config directory: {}",
            e
        );
    }
}
