//! keyz-tui Library
//!
//! This library provides the layout engine, scroll controller, render pass
//! and application state for the keyz-ro keyboard shortcut overlay.
//!
//! # Example
//!
//! ```rust
//! use keyz_config::parse_document;
//! use keyz_tui::layout::{LayoutMetrics, Viewport, compute_layout};
//!
//! let config = parse_document(
//!     r#"[{"name":"Editor","keys":[{"key":"Ctrl+S","description":"Save"}]}]"#,
//! )
//! .unwrap();
//! let viewport = Viewport::new(600.0, 400.0, 64.0);
//! let layout = compute_layout(&config, 0.0, &viewport, &LayoutMetrics::default());
//! assert_eq!(layout.visible_rows().count(), 2);
//! ```

pub mod app;
pub mod cli;
pub mod layout;
pub mod runtime;
pub mod scroll;
pub mod ui;

// Re-export commonly used types at the crate root
pub use app::{App, HEADER_HEIGHT, Jump};
pub use layout::{Layout, LayoutEngine, LayoutMetrics, PositionedRow, RowKind, Viewport};
