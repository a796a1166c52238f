//! TileRenderer: paints tiling records onto the canvas and shows them.

use crate::core::{Canvas, Display, DrawError, Palette, TilingRecord};
use crate::types::{GRID_SIDE, TILE_PX};

/// Owns the palette, the canvas and the display surface.
///
/// The display is opened by [`TileRenderer::new`] and closed by
/// [`TileRenderer::finish`], or on drop if `finish` was never called.
pub struct TileRenderer<D: Display> {
    palette: Palette,
    canvas: Canvas,
    display: D,
    open: bool,
}

impl<D: Display> TileRenderer<D> {
    pub fn new(palette: Palette, mut display: D) -> Result<Self, DrawError> {
        display.open()?;
        Ok(Self {
            palette,
            canvas: Canvas::new(),
            display,
            open: true,
        })
    }

    /// Parse `line` and render it.
    ///
    /// The whole record is validated before any pixel changes, so on error the
    /// canvas still shows the previous tiling.
    pub fn render(&mut self, line: &str) -> Result<(), DrawError> {
        let record = TilingRecord::parse(line)?;
        self.render_record(&record)
    }

    pub fn render_record(&mut self, record: &TilingRecord) -> Result<(), DrawError> {
        self.paint(record);
        self.display.present(&self.canvas)
    }

    fn paint(&mut self, record: &TilingRecord) {
        for x in 0..GRID_SIDE {
            for y in 0..GRID_SIDE {
                let color = self.palette.color(record.symbol_at(x, y));
                self.canvas.fill_rect(
                    x as u32 * TILE_PX,
                    y as u32 * TILE_PX,
                    TILE_PX,
                    TILE_PX,
                    color,
                );
            }
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Close the display and report any error doing so.
    pub fn finish(mut self) -> Result<(), DrawError> {
        self.open = false;
        self.display.close()
    }
}

impl<D: Display> Drop for TileRenderer<D> {
    fn drop(&mut self) {
        if self.open {
            if let Err(e) = self.display.close() {
                log::warn!("closing display failed: {e}");
            }
        }
    }
}
