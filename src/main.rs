//! Pentomino tiling renderer (default binary).
//!
//! Reads one 64-character tiling per line from stdin and writes
//! `images/tiling_<n>.png` for each, in input order. Any error ends the run
//! with a non-zero exit status.

use std::io;

use anyhow::{Context, Result};

use pentomino_draw::engine::{run_with_config, DrawConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DrawConfig::default();
    let stdin = io::stdin();
    let written = run_with_config(&config, stdin.lock())
        .with_context(|| format!("rendering tilings into {}", config.output_dir.display()))?;

    log::debug!("done after {written} tiling(s)");
    Ok(())
}
