//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (record parsing, raster rendering, terminal preview).
//!
//! # Grid Dimensions
//!
//! A tiling covers a chessboard:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIDE` | 8 | Cells per row and per column |
//! | `CELL_COUNT` | 64 | Cells in one tiling record |
//! | `TILE_PX` | 100 | Edge length of one rendered tile in pixels |
//! | `CANVAS_PX` | 800 | Edge length of the rendered image in pixels |
//!
//! Cell `(x, y)` lives at flat offset `x + 8 * y` (row-major, `y` is the row).
//!
//! # Examples
//!
//! ```
//! use pentomino_draw_types::{cell_offset, Symbol, CANVAS_PX, GRID_SIDE, TILE_PX};
//!
//! // Symbols are the twelve pentomino letters plus an uncovered cell.
//! assert_eq!(Symbol::from_char('X'), Some(Symbol::X));
//! assert_eq!(Symbol::from_char(' '), Some(Symbol::Empty));
//! assert_eq!(Symbol::from_char('?'), None);
//!
//! // Row-major layout.
//! assert_eq!(cell_offset(3, 2), 19);
//!
//! assert_eq!(GRID_SIDE as u32 * TILE_PX, CANVAS_PX);
//! ```

/// Cells per grid row and per grid column (8)
pub const GRID_SIDE: u8 = 8;

/// Cells in one tiling record (64)
pub const CELL_COUNT: usize = (GRID_SIDE as usize) * (GRID_SIDE as usize);

/// Edge length of one tile in pixels (100)
pub const TILE_PX: u32 = 100;

/// Edge length of the square canvas in pixels (800)
pub const CANVAS_PX: u32 = (GRID_SIDE as u32) * TILE_PX;

/// Number of distinct symbols a record may contain (12 pentominoes + empty)
pub const SYMBOL_COUNT: usize = 13;

/// Flat record offset of grid cell `(x, y)`.
#[inline]
pub const fn cell_offset(x: u8, y: u8) -> usize {
    (x as usize) + (GRID_SIDE as usize) * (y as usize)
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// A cell label in a tiling record
///
/// The twelve free pentominoes are named after the letters they resemble:
/// **F L N P Y T U V W Z I X**. `Empty` marks a cell no pentomino covers
/// (the four centre squares in the classic 8x8 problem), written as a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    F,
    L,
    N,
    P,
    Y,
    T,
    U,
    V,
    W,
    Z,
    I,
    X,
    Empty,
}

impl Symbol {
    /// Every symbol, in palette order.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::F,
        Symbol::L,
        Symbol::N,
        Symbol::P,
        Symbol::Y,
        Symbol::T,
        Symbol::U,
        Symbol::V,
        Symbol::W,
        Symbol::Z,
        Symbol::I,
        Symbol::X,
        Symbol::Empty,
    ];

    /// Parse a symbol from its record character (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pentomino_draw_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('F'), Some(Symbol::F));
    /// assert_eq!(Symbol::from_char('f'), None);
    /// assert_eq!(Symbol::from_char(' '), Some(Symbol::Empty));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Symbol::F),
            'L' => Some(Symbol::L),
            'N' => Some(Symbol::N),
            'P' => Some(Symbol::P),
            'Y' => Some(Symbol::Y),
            'T' => Some(Symbol::T),
            'U' => Some(Symbol::U),
            'V' => Some(Symbol::V),
            'W' => Some(Symbol::W),
            'Z' => Some(Symbol::Z),
            'I' => Some(Symbol::I),
            'X' => Some(Symbol::X),
            ' ' => Some(Symbol::Empty),
            _ => None,
        }
    }

    /// The character this symbol is written as in a record.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::F => 'F',
            Symbol::L => 'L',
            Symbol::N => 'N',
            Symbol::P => 'P',
            Symbol::Y => 'Y',
            Symbol::T => 'T',
            Symbol::U => 'U',
            Symbol::V => 'V',
            Symbol::W => 'W',
            Symbol::Z => 'Z',
            Symbol::I => 'I',
            Symbol::X => 'X',
            Symbol::Empty => ' ',
        }
    }

    /// Position of this symbol in [`Symbol::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}
