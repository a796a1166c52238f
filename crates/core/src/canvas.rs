//! Fixed-size RGB raster the tiles are painted onto.

use image::RgbImage;

use crate::types::{Rgb, CANVAS_PX, TILE_PX};

/// 800x800 RGB canvas. Allocated once and repainted in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    img: RgbImage,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A black canvas of `CANVAS_PX` x `CANVAS_PX`.
    pub fn new() -> Self {
        Self {
            img: RgbImage::new(CANVAS_PX, CANVAS_PX),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Rgb::from(self.img.get_pixel(x, y).0))
    }

    /// Color at the origin pixel of grid tile `(tx, ty)`.
    pub fn tile_color(&self, tx: u8, ty: u8) -> Option<Rgb> {
        self.pixel(tx as u32 * TILE_PX, ty as u32 * TILE_PX)
    }

    /// Fill a rectangle, clipped to the canvas bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        let px = image::Rgb(color.to_array());
        for py in y..y_end {
            for pxx in x..x_end {
                self.img.put_pixel(pxx, py, px);
            }
        }
    }

    /// Raw RGB bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    /// The backing image, for encoding.
    pub fn image(&self) -> &RgbImage {
        &self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black_and_fixed_size() {
        let c = Canvas::new();
        assert_eq!((c.width(), c.height()), (800, 800));
        assert_eq!(c.pixel(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(c.pixel(799, 799), Some(Rgb::new(0, 0, 0)));
        assert_eq!(c.pixel(800, 0), None);
    }

    #[test]
    fn fill_rect_paints_half_open_block() {
        let mut c = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        c.fill_rect(100, 200, 100, 100, red);

        assert_eq!(c.pixel(100, 200), Some(red));
        assert_eq!(c.pixel(199, 299), Some(red));
        assert_eq!(c.pixel(200, 200), Some(Rgb::default()));
        assert_eq!(c.pixel(100, 300), Some(Rgb::default()));
        assert_eq!(c.pixel(99, 200), Some(Rgb::default()));
        assert_eq!(c.tile_color(1, 2), Some(red));
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut c = Canvas::new();
        let blue = Rgb::new(0, 0, 255);
        c.fill_rect(750, 750, 500, 500, blue);
        assert_eq!(c.pixel(799, 799), Some(blue));
        assert_eq!((c.width(), c.height()), (800, 800));
    }
}
