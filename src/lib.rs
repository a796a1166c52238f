//! Pentomino tiling renderer (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benches can use `pentomino_draw::{core,engine,term,types}`.

pub use pentomino_draw_core as core;
pub use pentomino_draw_engine as engine;
pub use pentomino_draw_term as term;
pub use pentomino_draw_types as types;
