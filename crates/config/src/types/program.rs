//! A named group of keybinds.

use serde::Serialize;

use super::{Keybind, truncate_field};
use crate::constants::MAX_KEYBINDS;

/// A program and the keybinds documented for it, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    name: String,
    #[serde(rename = "keys")]
    keybinds: Vec<Keybind>,
}

impl Program {
    /// Creates a program with no keybinds. The name is truncated to the string cap.
    pub fn new(name: &str) -> Self {
        Self {
            name: truncate_field(name),
            keybinds: Vec::new(),
        }
    }

    /// Appends a keybind unless the program is already full.
    ///
    /// Returns `false` (and drops the keybind) once `MAX_KEYBINDS` is reached.
    pub fn push_keybind(&mut self, keybind: Keybind) -> bool {
        if self.is_full() {
            return false;
        }
        self.keybinds.push(keybind);
        true
    }

    /// Whether no more keybinds can be added.
    pub fn is_full(&self) -> bool {
        self.keybinds.len() >= MAX_KEYBINDS
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keybinds(&self) -> &[Keybind] {
        &self.keybinds
    }

    pub fn keybind_count(&self) -> usize {
        self.keybinds.len()
    }
}
