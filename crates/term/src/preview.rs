//! PreviewView: maps a rendered canvas into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Canvas;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, GRID_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Downsamples the canvas to one terminal block per tile, framed by a border,
/// with a caption line underneath.
pub struct PreviewView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for PreviewView {
    fn default() -> Self {
        // 2x1 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl PreviewView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered grid, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = GRID_SIDE as u16;
        (side * self.cell_w + 2, side * self.cell_h + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `frame` is the zero-based number of the tiling being shown.
    pub fn render_into(
        &self,
        canvas: &Canvas,
        frame: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        // One spare row for the caption.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for ty in 0..GRID_SIDE {
            for tx in 0..GRID_SIDE {
                let color = canvas.tile_color(tx, ty).unwrap_or_default();
                let px = start_x + 1 + tx as u16 * self.cell_w;
                let py = start_y + 1 + ty as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::solid(color));
            }
        }

        let caption = format!("tiling #{frame}");
        let cap_w = caption.chars().count() as u16;
        let cap_x = start_x.saturating_add(frame_w.saturating_sub(cap_w) / 2);
        fb.put_str(cap_x, start_y.saturating_add(frame_h), &caption, CellStyle::default());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &Canvas, frame: u64, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }
}
