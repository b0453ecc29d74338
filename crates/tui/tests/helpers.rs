//! Test helpers for TUI testing.
//!
//! Provides a harness that renders the app into an in-memory terminal and
//! fixtures for building keybinding documents.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use keyz_config::{Config, parse_document};
use keyz_tui::App;
use ratatui::{Terminal, backend::TestBackend};

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let app = App::new(config);
        Self { app, terminal }
    }

    /// Render one frame and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render one frame and return the buffer split into rows.
    pub fn render_lines(&mut self) -> Vec<String> {
        self.render().lines().map(str::to_string).collect()
    }

    /// Resize the mock terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }

    pub fn wheel_down(&mut self) {
        self.app.handle_event(&mouse(MouseEventKind::ScrollDown));
    }

    pub fn wheel_up(&mut self) {
        self.app.handle_event(&mouse(MouseEventKind::ScrollUp));
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app
            .handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

fn mouse(kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
}

/// The single-program example document.
pub fn editor_config() -> Config {
    parse_document(r#"[{"name":"Editor","keys":[{"key":"Ctrl+S","description":"Save"}]}]"#)
        .expect("valid document")
}

/// A config with `programs` programs named `prog{i}`, each with `keys`
/// keybinds named `key{i}.{k}`.
pub fn grid_config(programs: usize, keys: usize) -> Config {
    let doc: Vec<serde_json::Value> = (0..programs)
        .map(|p| {
            let keys: Vec<serde_json::Value> = (0..keys)
                .map(|k| {
                    serde_json::json!({
                        "key": format!("key{p}.{k}"),
                        "description": format!("does {p}.{k}"),
                    })
                })
                .collect();
            serde_json::json!({ "name": format!("prog{p}"), "keys": keys })
        })
        .collect();
    keyz_config::loader::from_value(&serde_json::Value::Array(doc)).expect("array document")
}
