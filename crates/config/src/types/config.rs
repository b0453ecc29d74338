//! The complete keybinding model.

use serde::Serialize;

use super::Program;
use crate::constants::MAX_PROGRAMS;

/// All programs shown by the overlay, in display order.
///
/// Serializes as a bare array, which is the on-disk document shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    programs: Vec<Program>,
}

impl Config {
    /// A config with no programs. This is the degraded state when nothing loads.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a program unless the config is already full.
    ///
    /// Returns `false` (and drops the program) once `MAX_PROGRAMS` is reached.
    pub fn push_program(&mut self, program: Program) -> bool {
        if self.is_full() {
            return false;
        }
        self.programs.push(program);
        true
    }

    /// Whether no more programs can be added.
    pub fn is_full(&self) -> bool {
        self.programs.len() >= MAX_PROGRAMS
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Total keybinds across every program.
    pub fn keybind_count(&self) -> usize {
        self.programs.iter().map(Program::keybind_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Renders the config as a pretty-printed JSON document.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
