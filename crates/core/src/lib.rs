//! Core drawing model - pure, deterministic, and testable
//!
//! This crate holds everything needed to turn a tiling record into pixels.
//! It performs **no I/O**: reading input, writing PNG files and talking to a
//! terminal all live in other crates, which keeps this one:
//!
//! - **Deterministic**: the same record always produces a bit-identical canvas
//! - **Strict**: unknown symbols and short records are errors, never defaults
//! - **Portable**: usable headless, in tests, or behind any display surface
//!
//! # Module Structure
//!
//! - [`palette`]: the 13-entry symbol-to-color table
//! - [`record`]: parsing and validating one 64-cell tiling line
//! - [`canvas`]: the fixed 800x800 RGB raster
//! - [`display`]: the display surface trait and a headless implementation
//! - [`error`]: the shared [`DrawError`] type
//!
//! # Example
//!
//! ```
//! use pentomino_draw_core::{Canvas, Palette, TilingRecord};
//! use pentomino_draw_core::types::TILE_PX;
//!
//! let palette = Palette::default();
//! let record = TilingRecord::parse(&"X".repeat(64)).unwrap();
//!
//! let mut canvas = Canvas::new();
//! for (x, y, sym) in record.iter() {
//!     let (px, py) = (x as u32 * TILE_PX, y as u32 * TILE_PX);
//!     canvas.fill_rect(px, py, TILE_PX, TILE_PX, palette.color(sym));
//! }
//! assert_eq!(canvas.tile_color(4, 4), Some(palette.color(record.symbol_at(4, 4))));
//! ```

pub mod canvas;
pub mod display;
pub mod error;
pub mod palette;
pub mod record;

pub use pentomino_draw_types as types;

pub use canvas::Canvas;
pub use display::{Display, HeadlessDisplay};
pub use error::DrawError;
pub use palette::Palette;
pub use record::TilingRecord;
