//! Layout engine for the keybinding list.
//!
//! Responsibilities:
//! - Compute the total content height of a config.
//! - Derive the valid scroll range for a viewport.
//! - Assign a vertical position and a visibility flag to every row.
//!
//! Does NOT handle:
//! - Drawing (see `ui` module); rows are only positioned here.
//! - Accumulating wheel input (see `scroll` module).
//!
//! Invariants:
//! - `0 <= clamped_scroll <= max_scroll` for every returned `Layout`.
//! - Rows are emitted in display order: each program header followed by its keybinds.
//! - Invisible rows are still emitted and still advance the cursor.
//! - The scroll offset is clamped before and again after rows are positioned.

mod metrics;


pub use metrics::{LayoutMetrics, Viewport};

use keyz_config::Config;

/// What a positioned row displays, as indices into the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    ProgramHeader { program: usize },
    Keybind { program: usize, keybind: usize },
}

/// A row placed at a vertical position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedRow {
    pub kind: RowKind,
    /// Top edge of the row.
    pub y: f32,
    /// Whether the row lies inside the content area and should be drawn.
    pub visible: bool,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub rows: Vec<PositionedRow>,
    pub total_content_height: f32,
    pub max_scroll: f32,
    pub clamped_scroll: f32,
}

impl Layout {
    /// Rows that should be handed to the render pass.
    pub fn visible_rows(&self) -> impl Iterator<Item = &PositionedRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Whether content is scrolled past the top.
    pub fn has_more_above(&self) -> bool {
        self.clamped_scroll > 0.0
    }

    /// Whether content extends below the viewport.
    pub fn has_more_below(&self) -> bool {
        self.clamped_scroll < self.max_scroll
    }
}

/// Total height of all programs and keybinds.
///
/// Each program contributes its header advance plus one block gap; each
/// keybind contributes one keybind row. An empty config has height zero.
pub fn content_height(config: &Config, metrics: &LayoutMetrics) -> f32 {
    let per_program = metrics.header_advance + metrics.block_spacing;
    config
        .programs()
        .iter()
        .map(|program| per_program + program.keybind_count() as f32 * metrics.keybind_advance)
        .sum()
}

/// Largest valid scroll offset for content of height `total` in `viewport`.
pub fn max_scroll(total_content_height: f32, viewport: &Viewport) -> f32 {
    (total_content_height - viewport.usable_height()).max(0.0)
}

/// Clamps `offset` into `0..=max_scroll`. NaN becomes zero.
pub fn clamp_scroll(offset: f32, max_scroll: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_scroll.max(0.0))
}

/// Positions every row of `config` for the given scroll offset.
pub fn compute_layout(
    config: &Config,
    scroll_offset: f32,
    viewport: &Viewport,
    metrics: &LayoutMetrics,
) -> Layout {
    position_rows(
        config,
        content_height(config, metrics),
        scroll_offset,
        viewport,
        metrics,
    )
}

/// Layout engine with the content height cached.
///
/// The config never changes after startup, so its extent is computed once.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    metrics: LayoutMetrics,
    content_height: f32,
    program_count: usize,
    keybind_count: usize,
}

impl LayoutEngine {
    pub fn new(config: &Config, metrics: LayoutMetrics) -> Self {
        Self {
            content_height: content_height(config, &metrics),
            metrics,
            program_count: config.program_count(),
            keybind_count: config.keybind_count(),
        }
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Positions every row of `config`, which must be the config this engine was built from.
    pub fn layout(&self, config: &Config, scroll_offset: f32, viewport: &Viewport) -> Layout {
        debug_assert!(
            config.program_count() == self.program_count
                && config.keybind_count() == self.keybind_count,
            "layout engine used with a different config than it was built from"
        );
        position_rows(
            config,
            self.content_height,
            scroll_offset,
            viewport,
            &self.metrics,
        )
    }
}

fn position_rows(
    config: &Config,
    total_content_height: f32,
    scroll_offset: f32,
    viewport: &Viewport,
    metrics: &LayoutMetrics,
) -> Layout {
    let max = max_scroll(total_content_height, viewport);
    let clamped = clamp_scroll(scroll_offset, max);

    let mut rows = Vec::with_capacity(config.program_count() + config.keybind_count());
    let mut cursor = viewport.header_height + metrics.padding - clamped;

    for (program_idx, program) in config.programs().iter().enumerate() {
        if program_idx > 0 {
            cursor += metrics.block_spacing;
        }

        rows.push(PositionedRow {
            kind: RowKind::ProgramHeader {
                program: program_idx,
            },
            y: cursor,
            visible: header_visible(cursor, viewport),
        });
        cursor += metrics.header_advance;

        for keybind_idx in 0..program.keybind_count() {
            rows.push(PositionedRow {
                kind: RowKind::Keybind {
                    program: program_idx,
                    keybind: keybind_idx,
                },
                y: cursor,
                visible: keybind_visible(cursor, viewport, metrics),
            });
            cursor += metrics.keybind_advance;
        }
    }

    // Redundant safety clamp: same extent and viewport as above, so it never
    // changes the value. A viewport that shrank since the last frame is
    // handled by `App::update`, which clamps against the previous range first.
    let clamped_scroll = clamp_scroll(clamped, max);

    Layout {
        rows,
        total_content_height,
        max_scroll: max,
        clamped_scroll,
    }
}

fn header_visible(y: f32, viewport: &Viewport) -> bool {
    y >= viewport.header_height && y < viewport.height
}

fn keybind_visible(y: f32, viewport: &Viewport, metrics: &LayoutMetrics) -> bool {
    y >= viewport.header_height && y + metrics.line_height <= viewport.height
}
