//! Display surface abstraction.
//!
//! A display is opened once when the renderer is built, shown every finished
//! canvas, and closed when the renderer finishes. Saved images never depend on
//! what the display does.

use crate::canvas::Canvas;
use crate::error::DrawError;

pub trait Display {
    /// Acquire the surface. Errors are reported as [`DrawError::Initialization`].
    fn open(&mut self) -> Result<(), DrawError>;

    /// Show a completely painted canvas.
    fn present(&mut self, canvas: &Canvas) -> Result<(), DrawError>;

    /// Release the surface. Must be safe to call on a surface that was never opened.
    fn close(&mut self) -> Result<(), DrawError>;
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn open(&mut self) -> Result<(), DrawError> {
        (**self).open()
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), DrawError> {
        (**self).present(canvas)
    }

    fn close(&mut self) -> Result<(), DrawError> {
        (**self).close()
    }
}

/// Display that shows nothing. Used for batch runs and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessDisplay {
    open: bool,
    presented: u64,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of frames presented since creation.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Display for HeadlessDisplay {
    fn open(&mut self) -> Result<(), DrawError> {
        self.open = true;
        Ok(())
    }

    fn present(&mut self, _canvas: &Canvas) -> Result<(), DrawError> {
        if !self.open {
            return Err(DrawError::Display("present on a closed display".into()));
        }
        self.presented += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DrawError> {
        self.open = false;
        Ok(())
    }
}
