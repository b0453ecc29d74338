//! Application state for the overlay.
//!
//! Responsibilities:
//! - Own the loaded config, the cached layout engine and the header counters.
//! - Thread the scroll offset from frame to frame.
//! - Run the per-frame pipeline: scroll, layout, render.
//!
//! Does NOT handle:
//! - Terminal setup or the frame timer (see `main.rs` and `runtime`).
//! - Loading the config (see `runtime::config`).
//!
//! Invariants:
//! - The config is never modified after construction.
//! - The stored scroll offset is always the clamped offset of the last layout.
//! - Wheel input is applied at most once per frame.

mod input;


use ratatui::Frame;

use keyz_config::Config;

use crate::layout::{Layout, LayoutEngine, LayoutMetrics, Viewport};
use crate::scroll::{self, WheelAccumulator};
use crate::ui::{self, RenderContext, Summary, theme::Palette};

/// Height of the header band in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// A jump to either end of the list, applied on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    Top,
    Bottom,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    config: Config,
    engine: LayoutEngine,
    summary: Summary,
    palette: Palette,
    scroll_offset: f32,
    last_max_scroll: f32,
    wheel: WheelAccumulator,
    pending_jump: Option<Jump>,
    pub should_quit: bool,
}

impl App {
    /// Creates the app with terminal metrics.
    pub fn new(config: Config) -> Self {
        Self::with_metrics(config, LayoutMetrics::terminal())
    }

    pub fn with_metrics(config: Config, metrics: LayoutMetrics) -> Self {
        let engine = LayoutEngine::new(&config, metrics);
        let summary = Summary::from_config(&config);
        Self {
            config,
            engine,
            summary,
            palette: Palette::default(),
            scroll_offset: 0.0,
            last_max_scroll: 0.0,
            wheel: WheelAccumulator::default(),
            pending_jump: None,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Queues wheel input for the next frame. Positive scrolls toward the top.
    pub fn scroll_wheel(&mut self, delta: f32) {
        self.wheel.push(delta);
    }

    /// Queues a jump to the top or bottom for the next frame.
    pub fn jump(&mut self, jump: Jump) {
        self.pending_jump = Some(jump);
    }

    /// Applies queued input and lays out the content for `viewport`.
    ///
    /// Wheel input is clamped against the previous frame's range; the layout
    /// then clamps again against the current viewport.
    pub fn update(&mut self, viewport: &Viewport) -> Layout {
        if !self.wheel.is_idle() {
            let delta = self.wheel.take();
            self.scroll_offset = scroll::advance(self.scroll_offset, delta, self.last_max_scroll);
        }
        match self.pending_jump.take() {
            Some(Jump::Top) => self.scroll_offset = 0.0,
            Some(Jump::Bottom) => self.scroll_offset = f32::MAX,
            None => {}
        }

        let layout = self.engine.layout(&self.config, self.scroll_offset, viewport);
        self.scroll_offset = layout.clamped_scroll;
        self.last_max_scroll = layout.max_scroll;
        layout
    }

    /// Viewport of a terminal frame.
    pub fn viewport_for(frame: &Frame) -> Viewport {
        let area = frame.area();
        Viewport::new(
            f32::from(area.width),
            f32::from(area.height),
            f32::from(HEADER_HEIGHT),
        )
    }

    /// Runs one frame: apply input, lay out, draw.
    pub fn render(&mut self, f: &mut Frame) {
        let viewport = Self::viewport_for(f);
        let layout = self.update(&viewport);
        ui::render(
            f,
            &RenderContext {
                config: &self.config,
                summary: &self.summary,
                layout: &layout,
                header_height: HEADER_HEIGHT,
                palette: &self.palette,
            },
        );
    }
}
