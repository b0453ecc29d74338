//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Resolve the document path from CLI args, environment and platform defaults.
//! - Load the document with the bootstrap fallback.
//!
//! Does NOT handle:
//! - Parsing documents (see `keyz_config::loader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Path precedence: `--config-path` / `KEYZ_CONFIG_PATH` > platform default.
//! - Blank path arguments are ignored.
//! - Startup always yields a config, possibly empty.

use std::path::PathBuf;

use keyz_config::{LoadOutcome, default_config_path, load_or_bootstrap};

use crate::cli::Cli;

/// Fallback used when the platform config directory cannot be determined.
const FALLBACK_CONFIG_PATH: &str = "keyz-ro.json";

/// Resolves the document path for this run.
pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        return path.clone();
    }

    match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{:#}. Using {}", e, FALLBACK_CONFIG_PATH);
            PathBuf::from(FALLBACK_CONFIG_PATH)
        }
    }
}

/// Loads the config for this run, bootstrapping a starter document if needed.
pub fn load_startup_config(cli: &Cli) -> (PathBuf, LoadOutcome) {
    let path = resolve_config_path(cli);
    let outcome = load_or_bootstrap(&path);
    tracing::info!(
        path = %path.display(),
        source = %outcome.source,
        "Startup config ready"
    );
    (path, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use keyz_config::ConfigSource;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_path_wins() {
        temp_env::with_var_unset("KEYZ_CONFIG_PATH", || {
            let cli = Cli::parse_from(["keyz-tui", "--config-path", "/tmp/custom.json"]);
            assert_eq!(resolve_config_path(&cli), PathBuf::from("/tmp/custom.json"));
        });
    }

    #[test]
    #[serial]
    fn test_env_path_used() {
        temp_env::with_var("KEYZ_CONFIG_PATH", Some("/tmp/from-env.json"), || {
            let cli = Cli::parse_from(["keyz-tui"]);
            assert_eq!(resolve_config_path(&cli), PathBuf::from("/tmp/from-env.json"));
        });
    }

    #[test]
    #[serial]
    fn test_blank_path_falls_back_to_default() {
        temp_env::with_var_unset("KEYZ_CONFIG_PATH", || {
            let cli = Cli::parse_from(["keyz-tui", "--config-path", "  "]);
            let resolved = resolve_config_path(&cli);
            if let Ok(default) = default_config_path() {
                assert_eq!(resolved, default);
            }
        });
    }

    #[test]
    #[serial]
    fn test_load_startup_config_bootstraps_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.json");
        temp_env::with_var_unset("KEYZ_CONFIG_PATH", || {
            let cli = Cli::parse_from([
                "keyz-tui".to_string(),
                "--config-path".to_string(),
                path.display().to_string(),
            ]);
            let (resolved, outcome) = load_startup_config(&cli);
            assert_eq!(resolved, path);
            assert_eq!(outcome.source, ConfigSource::Bootstrapped);
            assert_eq!(outcome.config.keybind_count(), 1);
        });
    }
}
