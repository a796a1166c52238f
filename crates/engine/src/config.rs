//! Run configuration.
//!
//! The binary always uses [`DrawConfig::default`]: images go to `images/` and
//! nothing is previewed. Other settings are only reachable from code.

use std::path::PathBuf;

use crate::core::{Display, HeadlessDisplay};
use crate::term::TerminalDisplay;

/// Directory images are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Where rendered canvases are shown while the batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Headless,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawConfig {
    pub output_dir: PathBuf,
    pub preview: PreviewMode,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview: PreviewMode::Headless,
        }
    }
}

impl DrawConfig {
    /// The display surface selected by `preview`. Not opened yet.
    pub fn display(&self) -> Box<dyn Display> {
        match self.preview {
            PreviewMode::Headless => Box::new(HeadlessDisplay::new()),
            PreviewMode::Terminal => Box::new(TerminalDisplay::new()),
        }
    }
}
