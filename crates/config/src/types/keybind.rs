//! A single key combination and its description.

use serde::Serialize;

use super::truncate_field;

/// One key-combination/description pair.
///
/// Both fields are truncated on construction; the original text is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keybind {
    key: String,
    description: String,
}

impl Keybind {
    /// Creates a keybind, truncating both fields to the string cap.
    pub fn new(key: &str, description: &str) -> Self {
        Self {
            key: truncate_field(key),
            description: truncate_field(description),
        }
    }

    /// The key combination label, e.g. `Ctrl+S`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// What the key combination does.
    pub fn description(&self) -> &str {
        &self.description
    }
}
