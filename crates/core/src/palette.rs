//! Symbol-to-color lookup table.
//!
//! The table is indexed by [`Symbol`], so it always holds exactly one color per
//! symbol. Characters outside the symbol set never reach it: they are rejected
//! when a record is parsed.

use crate::types::{Rgb, Symbol, SYMBOL_COUNT};

/// Immutable mapping from every [`Symbol`] to the color it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; SYMBOL_COUNT],
}

impl Default for Palette {
    /// Solarized accents for the pieces, black for uncovered cells.
    fn default() -> Self {
        Self {
            colors: [
                Rgb::new(131, 148, 150), // F
                Rgb::new(147, 161, 161), // L
                Rgb::new(238, 232, 213), // N
                Rgb::new(253, 246, 227), // P
                Rgb::new(181, 137, 0),   // Y
                Rgb::new(203, 75, 22),   // T
                Rgb::new(220, 50, 47),   // U
                Rgb::new(211, 54, 130),  // V
                Rgb::new(108, 113, 196), // W
                Rgb::new(38, 139, 210),  // Z
                Rgb::new(42, 161, 152),  // I
                Rgb::new(133, 153, 0),   // X
                Rgb::new(0, 0, 0),       // empty
            ],
        }
    }
}

impl Palette {
    /// Return a copy with the color for `symbol` replaced.
    pub fn with_color(mut self, symbol: Symbol, color: Rgb) -> Self {
        self.colors[symbol.index()] = color;
        self
    }

    #[inline]
    pub fn color(&self, symbol: Symbol) -> Rgb {
        self.colors[symbol.index()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Rgb)> + '_ {
        Symbol::ALL.into_iter().map(move |sym| (sym, self.color(sym)))
    }
}
