//! Keyboard and mouse input for the overlay.
//!
//! Responsibilities:
//! - Map wheel and navigation keys onto the single scroll axis.
//! - Detect quit requests.
//!
//! Non-responsibilities:
//! - Does NOT move the scroll offset directly (input is applied on the next frame)
//! - Does NOT read events from the terminal (see `main.rs`)

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use keyz_config::constants::PAGE_SCROLL_STEPS;

use crate::app::{App, Jump};

impl App {
    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_wheel(1.0),
                MouseEventKind::ScrollDown => self.scroll_wheel(-1.0),
                _ => {}
            },
            _ => {}
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_wheel(1.0),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_wheel(-1.0),
            KeyCode::PageUp => self.scroll_wheel(PAGE_SCROLL_STEPS),
            KeyCode::PageDown => self.scroll_wheel(-PAGE_SCROLL_STEPS),
            KeyCode::Home | KeyCode::Char('g') => self.jump(Jump::Top),
            KeyCode::End | KeyCode::Char('G') => self.jump(Jump::Bottom),
            _ => {}
        }
    }
}
