//! Rendering pipeline (engine crate).
//!
//! Ties the pure drawing model to the outside world:
//!
//! - [`tile_renderer`]: owns palette, canvas and display; paints one record at a time
//! - [`sink`]: writes each finished canvas as `tiling_<n>.png`
//! - [`config`]: output directory and preview mode
//! - [`driver`]: the line-by-line batch loop
//!
//! # Example
//!
//! ```no_run
//! use std::io::Cursor;
//! use pentomino_draw_engine::{run, PngSink, TileRenderer};
//! use pentomino_draw_engine::core::{HeadlessDisplay, Palette};
//!
//! let mut renderer = TileRenderer::new(Palette::default(), HeadlessDisplay::new())?;
//! let sink = PngSink::new("images");
//! let input = Cursor::new("X".repeat(64) + "\n");
//! assert_eq!(run(input, &mut renderer, &sink)?, 1);
//! renderer.finish()?;
//! # Ok::<(), pentomino_draw_engine::core::DrawError>(())
//! ```

pub mod config;
pub mod driver;
pub mod sink;
pub mod tile_renderer;

pub use pentomino_draw_core as core;
pub use pentomino_draw_term as term;
pub use pentomino_draw_types as types;

pub use config::{DrawConfig, PreviewMode, DEFAULT_OUTPUT_DIR};
pub use driver::{run, run_with_config};
pub use sink::PngSink;
pub use tile_renderer::TileRenderer;
