//! Viewport and spacing inputs to the layout engine.

/// The drawable area supplied by the host each frame.
///
/// The header band occupies `0..header_height`; content is drawn below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub header_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, header_height: f32) -> Self {
        Self {
            width,
            height,
            header_height,
        }
    }

    /// Height left for content below the header band. Never negative.
    pub fn usable_height(&self) -> f32 {
        (self.height - self.header_height).max(0.0)
    }
}

/// Vertical spacing of the content list.
///
/// All values are in the same unit as [`Viewport`] (pixels for a graphical
/// host, rows for the terminal host).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of one text line.
    pub line_height: f32,
    /// Gap between the header band and the first program.
    pub padding: f32,
    /// Cursor advance after a program header.
    pub header_advance: f32,
    /// Extra gap inserted before every program except the first.
    pub block_spacing: f32,
    /// Cursor advance per keybind row (key label with description below).
    pub keybind_advance: f32,
}

impl LayoutMetrics {
    /// Derives the standard proportions from a line height.
    ///
    /// Program headers and block gaps take one and a half lines; keybind
    /// rows take two lines.
    pub fn from_line_height(line_height: f32, padding: f32) -> Self {
        Self {
            line_height,
            padding,
            header_advance: line_height * 1.5,
            block_spacing: line_height * 1.5,
            keybind_advance: line_height * 2.0,
        }
    }

    /// Cell-aligned metrics for the terminal host: one unit per row.
    pub fn terminal() -> Self {
        Self {
            line_height: 1.0,
            padding: 1.0,
            header_advance: 2.0,
            block_spacing: 1.0,
            keybind_advance: 2.0,
        }
    }
}

impl Default for LayoutMetrics {
    /// 20pt text on a 28px line with 20px padding.
    fn default() -> Self {
        Self::from_line_height(28.0, 20.0)
    }
}
