//! Keybinding document model and loading for keyz-ro.
//!
//! This crate provides the bounded keybinding model, the lenient JSON
//! loader, and the startup fallback that writes a starter document when
//! no valid one exists.

pub mod constants;
pub mod loader;
pub mod persistence;
pub mod types;

pub use loader::{LoadError, load, parse_document};
pub use persistence::{
    BootstrapError, ConfigSource, LoadOutcome, default_config_path, load_or_bootstrap,
};
pub use types::{Config, Keybind, Program};
