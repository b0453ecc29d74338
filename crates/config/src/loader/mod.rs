//! Keybinding document loader.
//!
//! Responsibilities:
//! - Read a JSON document from disk and turn it into a bounded `Config`.
//! - Validate each program and keybind element, skipping invalid ones.
//! - Stop accepting elements once the model's capacity is reached.
//!
//! Does NOT handle:
//! - Writing the starter document or retrying (see `persistence` module).
//! - Creating directories or files; loading is a pure transform.
//!
//! Invariants / Assumptions:
//! - The document must be a top-level JSON array; anything else is a parse failure.
//! - Invalid elements are dropped silently and never abort the load.
//! - Capacity limits count accepted elements, so skipped elements do not use up slots.
//! - Element order from the document is preserved.

mod error;

#[cfg(test)]
mod tests;

pub use error::LoadError;

use std::path::Path;

use serde_json::Value;

use crate::types::{Config, Keybind, Program};

/// Loads the keybinding document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and
/// [`LoadError::Parse`] or [`LoadError::NotAnArray`] if the contents are
/// malformed or not an array.
pub fn load(path: &Path) -> Result<Config, LoadError> {
    let content = std::fs::read(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Invalid UTF-8 surfaces as a parse error, not a read error.
    let value: Value = serde_json::from_slice(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    from_value(&value).ok_or_else(|| LoadError::NotAnArray {
        path: path.to_path_buf(),
        found: value_kind(&value),
    })
}

/// Parses document text that is already in memory.
///
/// Returns `None` if the text is not JSON or not a top-level array.
pub fn parse_document(content: &str) -> Option<Config> {
    let value: Value = serde_json::from_str(content).ok()?;
    from_value(&value)
}

/// Builds a `Config` from a parsed JSON value.
///
/// Returns `None` if the value is not an array.
pub fn from_value(value: &Value) -> Option<Config> {
    let elements = value.as_array()?;
    let mut config = Config::empty();

    for (index, element) in elements.iter().enumerate() {
        if config.is_full() {
            let dropped = elements.len() - index;
            tracing::debug!(dropped, "Program capacity reached, dropping remaining programs");
            break;
        }
        match parse_program(element) {
            Some(program) => {
                config.push_program(program);
            }
            None => tracing::debug!(index, "Skipping invalid program entry"),
        }
    }

    Some(config)
}

/// Parses one program element, or `None` if its `name` or `keys` are invalid.
fn parse_program(element: &Value) -> Option<Program> {
    let name = element.get("name")?.as_str()?;
    let keys = element.get("keys")?.as_array()?;

    let mut program = Program::new(name);
    for (index, key_item) in keys.iter().enumerate() {
        if program.is_full() {
            let dropped = keys.len() - index;
            tracing::debug!(
                program = program.name(),
                dropped,
                "Keybind capacity reached, dropping remaining keybinds"
            );
            break;
        }
        match parse_keybind(key_item) {
            Some(keybind) => {
                program.push_keybind(keybind);
            }
            None => tracing::debug!(
                program = program.name(),
                index,
                "Skipping invalid keybind entry"
            ),
        }
    }

    Some(program)
}

/// Parses one keybind element, or `None` if `key` or `description` is not a string.
fn parse_keybind(element: &Value) -> Option<Keybind> {
    let key = element.get("key")?.as_str()?;
    let description = element.get("description")?.as_str()?;
    Some(Keybind::new(key, description))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
