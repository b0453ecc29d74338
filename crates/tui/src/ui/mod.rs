//! Render pass for the overlay.
//!
//! Responsibilities:
//! - Draw the header band, title, counters and separator.
//! - Draw the rows the layout engine marked visible.
//! - Draw the scroll indicators.
//!
//! Does NOT handle:
//! - Row positioning or scroll clamping (see `layout` module).
//! - Input handling (see `app` module).
//!
//! Invariants:
//! - Only rows from `Layout::visible_rows` are drawn.
//! - Nothing is written outside the frame area.

mod header;
pub mod theme;

pub use header::Summary;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Block,
};

use keyz_config::Config;

use crate::layout::{Layout, RowKind};
use theme::Palette;

/// Application title shown in the header band.
pub const TITLE: &str = "KeyZ-ro";

/// Column of program names.
pub const PROGRAM_COLUMN: u16 = 2;
/// Column of key labels.
pub const KEY_COLUMN: u16 = 4;
/// Column of descriptions, drawn one line below their key label.
pub const DESCRIPTION_COLUMN: u16 = 6;

pub const MORE_ABOVE: &str = "▲";
pub const MORE_BELOW: &str = "▼";

/// Everything the render pass reads in one frame.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub summary: &'a Summary,
    pub layout: &'a Layout,
    pub header_height: u16,
    pub palette: &'a Palette,
}

/// Draws one frame.
pub fn render(frame: &mut Frame, ctx: &RenderContext<'_>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(ctx.palette.base()), area);

    for row in ctx.layout.visible_rows() {
        let y = area.y + to_cell(row.y);
        match row.kind {
            RowKind::ProgramHeader { program } => {
                let Some(program) = ctx.config.programs().get(program) else {
                    continue;
                };
                draw_text(
                    frame,
                    area,
                    area.x + PROGRAM_COLUMN,
                    y,
                    program.name(),
                    ctx.palette.program(),
                );
            }
            RowKind::Keybind { program, keybind } => {
                let Some(keybind) = ctx
                    .config
                    .programs()
                    .get(program)
                    .and_then(|p| p.keybinds().get(keybind))
                else {
                    continue;
                };
                draw_text(
                    frame,
                    area,
                    area.x + KEY_COLUMN,
                    y,
                    keybind.key(),
                    ctx.palette.key(),
                );
                draw_text(
                    frame,
                    area,
                    area.x + DESCRIPTION_COLUMN,
                    y.saturating_add(1),
                    keybind.description(),
                    ctx.palette.description(),
                );
            }
        }
    }

    // Header is drawn after the rows so nothing bleeds into the band.
    let band = Rect {
        height: ctx.header_height.min(area.height),
        ..area
    };
    header::render_header(frame, band, ctx.summary, ctx.palette);

    render_indicators(frame, area, ctx);
}

fn render_indicators(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    if area.width < 2 || area.height <= ctx.header_height {
        return;
    }
    let x = area.x + area.width - 2;
    if ctx.layout.has_more_above() {
        draw_text(
            frame,
            area,
            x,
            area.y + ctx.header_height,
            MORE_ABOVE,
            ctx.palette.indicator(),
        );
    }
    if ctx.layout.has_more_below() {
        draw_text(
            frame,
            area,
            x,
            area.y + area.height - 1,
            MORE_BELOW,
            ctx.palette.indicator(),
        );
    }
}

/// Converts a layout coordinate to a cell row.
fn to_cell(y: f32) -> u16 {
    y.floor().max(0.0) as u16
}

/// Draws a single line of text at `(x, y)`, clipped to `bounds`.
fn draw_text(frame: &mut Frame, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;
    if x >= right || y >= bottom || x < bounds.x || y < bounds.y {
        return;
    }
    let rect = Rect::new(x, y, right - x, 1);
    frame.render_widget(Line::styled(text, style), rect);
}
