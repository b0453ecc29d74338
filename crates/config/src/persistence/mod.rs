//! Startup loading with bootstrap fallback.
//!
//! Responsibilities:
//! - Resolve the document location and create its directory.
//! - Load the document, writing and re-reading a starter document on failure.
//! - Degrade to an empty config when even the starter document cannot be loaded.
//!
//! Does NOT handle:
//! - Parsing or validating documents (see `loader` module).
//! - Live reload; the config is loaded once per run.
//!
//! Invariants:
//! - `load_or_bootstrap` never fails; the application always reaches a renderable state.
//! - The starter document is written at most once per call and loaded at most twice.

use std::fmt;
use std::path::Path;

mod bootstrap;
mod path;

pub use bootstrap::{BootstrapError, default_document, write_default_document};
pub use path::{default_config_path, ensure_parent_dir};

use crate::loader::load;
use crate::types::Config;

/// Where the startup config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The existing document loaded on the first attempt.
    Loaded,
    /// The first attempt failed; the starter document was written and loaded.
    Bootstrapped,
    /// Both attempts failed; running with no programs.
    Empty,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::Bootstrapped => write!(f, "bootstrapped"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// Result of [`load_or_bootstrap`].
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub config: Config,
    pub source: ConfigSource,
}

/// Loads the document at `path`, falling back to the starter document.
///
/// On a read or parse failure the starter document is written to `path`
/// and loading is retried once. If the retry also fails the result is an
/// empty config. Failures are logged, never returned.
pub fn load_or_bootstrap(path: &Path) -> LoadOutcome {
    ensure_parent_dir(path);

    match load(path) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                programs = config.program_count(),
                keybinds = config.keybind_count(),
                "Loaded config"
            );
            return LoadOutcome {
                config,
                source: ConfigSource::Loaded,
            };
        }
        Err(e) => tracing::warn!("{}. Writing starter config.", e),
    }

    if let Err(e) = write_default_document(path) {
        tracing::warn!("{}", e);
    }

    match load(path) {
        Ok(config) => LoadOutcome {
            config,
            source: ConfigSource::Bootstrapped,
        },
        Err(e) => {
            tracing::error!("{}. Starting with an empty config.", e);
            LoadOutcome {
                config: Config::empty(),
                source: ConfigSource::Empty,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_bootstrap_uses_existing_document() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"[{"name":"Editor","keys":[{"key":"Ctrl+S","description":"Save"}]}]"#,
        )
        .unwrap();

        let outcome = load_or_bootstrap(&path);
        assert_eq!(outcome.source, ConfigSource::Loaded);
        assert_eq!(outcome.config.programs()[0].name(), "Editor");
    }

    #[test]
    fn test_load_or_bootstrap_writes_starter_when_missing() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("keyz-ro").join("config.json");

        let outcome = load_or_bootstrap(&path);
        assert_eq!(outcome.source, ConfigSource::Bootstrapped);
        assert_eq!(outcome.config, default_document(&path));
        assert!(path.is_file());
    }

    #[test]
    fn test_load_or_bootstrap_replaces_top_level_object() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"name":"Editor","keys":[]}"#).unwrap();

        let outcome = load_or_bootstrap(&path);
        assert_eq!(outcome.source, ConfigSource::Bootstrapped);
        assert_eq!(outcome.config.program_count(), 1);
        assert_eq!(outcome.config.keybind_count(), 1);
        assert_eq!(outcome.config.programs()[0].name(), "Example Program");
    }

    #[test]
    fn test_load_or_bootstrap_degrades_to_empty() {
        let temp = tempfile::tempdir().unwrap();
        // A directory at the document path can be neither read nor overwritten.
        let path = temp.path().join("config.json");
        std::fs::create_dir(&path).unwrap();

        let outcome = load_or_bootstrap(&path);
        assert_eq!(outcome.source, ConfigSource::Empty);
        assert!(outcome.config.is_empty());
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Loaded.to_string(), "loaded");
        assert_eq!(ConfigSource::Bootstrapped.to_string(), "bootstrapped");
        assert_eq!(ConfigSource::Empty.to_string(), "empty");
    }
}
