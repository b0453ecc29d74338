//! Color palette and style builders for the overlay.
//!
//! Every style used by the render pass comes from here so the look can be
//! changed in one place.

use ratatui::style::{Color, Modifier, Style};

/// The overlay's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub header_background: Color,
    pub title: Color,
    pub stats: Color,
    pub separator: Color,
    pub program: Color,
    pub key: Color,
    pub description: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(42, 42, 42),
            header_background: Color::Rgb(53, 51, 49),
            title: Color::Rgb(226, 161, 35),
            stats: Color::Rgb(153, 137, 122),
            separator: Color::Rgb(2, 2, 2),
            program: Color::Rgb(138, 173, 159),
            key: Color::Rgb(255, 77, 55),
            description: Color::Rgb(224, 207, 170),
        }
    }
}

impl Palette {
    /// Content area fill.
    pub fn base(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Header band fill.
    pub fn header_band(&self) -> Style {
        Style::default().bg(self.header_background)
    }

    /// Application title (accent + bold).
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.header_background)
            .add_modifier(Modifier::BOLD)
    }

    /// Program/binding counters.
    pub fn stats(&self) -> Style {
        Style::default().fg(self.stats).bg(self.header_background)
    }

    pub fn separator(&self) -> Style {
        Style::default().fg(self.separator).bg(self.header_background)
    }

    /// Program name headings.
    pub fn program(&self) -> Style {
        Style::default()
            .fg(self.program)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Key combination labels.
    pub fn key(&self) -> Style {
        Style::default().fg(self.key).bg(self.background)
    }

    pub fn description(&self) -> Style {
        Style::default().fg(self.description).bg(self.background)
    }

    /// Scroll indicator glyphs share the title accent.
    pub fn indicator(&self) -> Style {
        Style::default().fg(self.title).bg(self.background)
    }
}
