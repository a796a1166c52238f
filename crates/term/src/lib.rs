//! Terminal preview module.
//!
//! A small rendering layer that shows each finished canvas in the terminal
//! while a batch runs. It downsamples the 800x800 canvas to one colored block
//! per tile, renders into a simple framebuffer, and flushes that framebuffer
//! to the terminal with crossterm.
//!
//! Goals:
//! - Keep the saved images independent of anything drawn here
//! - Keep the view pure so it can be tested without a terminal
//! - Redraw only what changed between tilings

pub mod display;
pub mod fb;
pub mod preview;
pub mod renderer;

pub use pentomino_draw_core as core;
pub use pentomino_draw_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use preview::{PreviewView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
