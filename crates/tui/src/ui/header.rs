//! Header band: title, counters and separator.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Block};

use keyz_config::Config;

use super::{TITLE, draw_text, theme::Palette};

/// Columns between the counters and the right edge.
const STATS_RIGHT_MARGIN: u16 = 2;
/// Columns between the two counters.
const STATS_GAP: u16 = 2;

/// Counters shown in the header, computed once from the loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub programs: usize,
    pub keybinds: usize,
    programs_label: String,
    keybinds_label: String,
}

impl Summary {
    pub fn from_config(config: &Config) -> Self {
        let programs = config.program_count();
        let keybinds = config.keybind_count();
        Self {
            programs,
            keybinds,
            programs_label: format!("{programs} program(s)"),
            keybinds_label: format!("{keybinds} binding(s)"),
        }
    }

    pub fn programs_label(&self) -> &str {
        &self.programs_label
    }

    pub fn keybinds_label(&self) -> &str {
        &self.keybinds_label
    }
}

/// Draws the header band into the top `band.height` rows.
pub(super) fn render_header(frame: &mut Frame, band: Rect, summary: &Summary, palette: &Palette) {
    if band.height == 0 || band.width == 0 {
        return;
    }
    frame.render_widget(Block::default().style(palette.header_band()), band);

    let text_row = band.y + band.height.saturating_sub(1) / 2;
    draw_text(frame, band, band.x + 2, text_row, TITLE, palette.title());

    // Bindings counter is rightmost; programs counter sits to its left.
    let keybinds_width = Line::raw(summary.keybinds_label()).width() as u16;
    let programs_width = Line::raw(summary.programs_label()).width() as u16;
    let right = band.x + band.width;
    let keybinds_x = right.saturating_sub(keybinds_width + STATS_RIGHT_MARGIN);
    let programs_x = keybinds_x.saturating_sub(programs_width + STATS_GAP);
    let title_end = band.x + 2 + TITLE.len() as u16;

    if programs_x > title_end {
        draw_text(
            frame,
            band,
            programs_x,
            text_row,
            summary.programs_label(),
            palette.stats(),
        );
    }
    if keybinds_x > title_end {
        draw_text(
            frame,
            band,
            keybinds_x,
            text_row,
            summary.keybinds_label(),
            palette.stats(),
        );
    }

    if band.height > 1 {
        let separator = "─".repeat(band.width as usize);
        draw_text(
            frame,
            band,
            band.x,
            band.y + band.height - 1,
            &separator,
            palette.separator(),
        );
    }
}
