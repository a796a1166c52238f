//! TerminalDisplay: a [`Display`] that previews each canvas in the terminal.

use std::io::{self, Write};

use crate::core::{Canvas, Display, DrawError};
use crate::fb::FrameBuffer;
use crate::preview::{PreviewView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalDisplay<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: PreviewView,
    fb: FrameBuffer,
    // `None` follows the terminal's current size.
    viewport: Option<Viewport>,
    frames: u64,
    open: bool,
}

impl Default for TerminalDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDisplay<io::Stdout> {
    pub fn new() -> Self {
        Self::from_renderer(TerminalRenderer::new(), None)
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Preview into `out` at a fixed `viewport` instead of the real terminal.
    pub fn with_writer(out: W, viewport: Viewport) -> Self {
        Self::from_renderer(TerminalRenderer::with_writer(out), Some(viewport))
    }

    fn from_renderer(renderer: TerminalRenderer<W>, viewport: Option<Viewport>) -> Self {
        Self {
            renderer,
            view: PreviewView::default(),
            fb: FrameBuffer::new(0, 0),
            viewport,
            frames: 0,
            open: false,
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or_else(|| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn open(&mut self) -> Result<(), DrawError> {
        self.renderer
            .enter()
            .map_err(|e| DrawError::Initialization(format!("terminal: {e}")))?;
        self.open = true;
        log::debug!("terminal preview opened");
        Ok(())
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), DrawError> {
        if !self.open {
            return Err(DrawError::Display("present on a closed terminal".into()));
        }
        let viewport = self.viewport();
        self.view.render_into(canvas, self.frames, viewport, &mut self.fb);
        self.renderer
            .draw(&self.fb)
            .map_err(|e| DrawError::Display(e.to_string()))?;
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DrawError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.renderer
            .exit()
            .map_err(|e| DrawError::Display(e.to_string()))
    }
}
