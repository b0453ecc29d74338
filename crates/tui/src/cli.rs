//! Command-line argument parsing for keyz-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Config path resolution or loading (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for keyz-tui.
///
/// Config path precedence (highest to lowest):
/// 1. `--config-path`
/// 2. `KEYZ_CONFIG_PATH`
/// 3. The platform config directory (`~/.config/keyz-ro/config.json` on Linux)
#[derive(Debug, Parser)]
#[command(
    name = "keyz-tui",
    about = "Keyboard shortcut overlay for the terminal",
    version,
    after_help = "Examples:\n  keyz-tui\n  keyz-tui --config-path ~/dotfiles/keys.json\n  keyz-tui --log-dir /tmp/keyz-logs --no-mouse\n  keyz-tui --check\n"
)]
pub struct Cli {
    /// Path to the keybinding document
    #[arg(long, env = "KEYZ_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Load the document, print a summary and exit without opening the UI
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_defaults() {
        temp_env::with_var_unset("KEYZ_CONFIG_PATH", || {
            let cli = Cli::parse_from(["keyz-tui"]);
            assert!(cli.config_path.is_none());
            assert_eq!(cli.log_dir, PathBuf::from("logs"));
            assert!(!cli.no_mouse);
            assert!(!cli.check);
        });
    }

    #[test]
    fn test_cli_config_path_flag() {
        let cli = Cli::parse_from(["keyz-tui", "--config-path", "/etc/keyz/keys.json"]);
        assert_eq!(cli.config_path, Some(PathBuf::from("/etc/keyz/keys.json")));
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["keyz-tui", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_cli_check_flag() {
        let cli = Cli::parse_from(["keyz-tui", "--check"]);
        assert!(cli.check);
    }

    #[test]
    fn test_cli_log_dir_flag() {
        let cli = Cli::parse_from(["keyz-tui", "--log-dir", "/var/log/keyz"]);
        assert_eq!(cli.log_dir, PathBuf::from("/var/log/keyz"));
    }
}
