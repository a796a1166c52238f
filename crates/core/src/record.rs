//! Tiling record parsing.
//!
//! A record is one input line holding the symbol of each of the 64 cells in
//! row-major order. Parsing validates the whole record before anything is drawn,
//! so a bad record never leaves a half-painted canvas behind.

use std::fmt;

use crate::error::DrawError;
use crate::types::{cell_offset, Symbol, CELL_COUNT, GRID_SIDE};

/// A validated 8x8 tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilingRecord {
    cells: [Symbol; CELL_COUNT],
}

impl TilingRecord {
    /// Parse one input line.
    ///
    /// A trailing `\n` or `\r\n` is dropped. Spaces are cells, so no other
    /// whitespace is trimmed. Characters past the 64th are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentomino_draw_core::TilingRecord;
    /// use pentomino_draw_core::types::Symbol;
    ///
    /// let line = "X".repeat(64) + "\n";
    /// let rec = TilingRecord::parse(&line).unwrap();
    /// assert_eq!(rec.symbol_at(7, 7), Symbol::X);
    ///
    /// assert!(TilingRecord::parse("XXXX").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, DrawError> {
        let line = strip_line_ending(line);

        let len = line.chars().take(CELL_COUNT).count();
        if len < CELL_COUNT {
            return Err(DrawError::RecordTooShort { len });
        }

        let mut cells = [Symbol::Empty; CELL_COUNT];
        for (offset, ch) in line.chars().take(CELL_COUNT).enumerate() {
            cells[offset] =
                Symbol::from_char(ch).ok_or(DrawError::UnknownSymbol { symbol: ch, offset })?;
        }
        Ok(Self { cells })
    }

    /// A record with every cell set to `symbol`.
    pub fn filled(symbol: Symbol) -> Self {
        Self {
            cells: [symbol; CELL_COUNT],
        }
    }

    /// Symbol of grid cell `(x, y)`. Panics if either coordinate is outside `0..8`.
    #[inline]
    pub fn symbol_at(&self, x: u8, y: u8) -> Symbol {
        assert!(x < GRID_SIDE && y < GRID_SIDE, "cell ({x}, {y}) off grid");
        self.cells[cell_offset(x, y)]
    }

    pub fn cells(&self) -> &[Symbol; CELL_COUNT] {
        &self.cells
    }

    /// Iterate `(x, y, symbol)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, Symbol)> + '_ {
        self.cells.iter().enumerate().map(|(i, &sym)| {
            let side = GRID_SIDE as usize;
            ((i % side) as u8, (i / side) as u8, sym)
        })
    }
}

impl fmt::Display for TilingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in &self.cells {
            write!(f, "{}", sym.as_char())?;
        }
        Ok(())
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_row_major() {
        let mut line = String::new();
        for y in 0..8 {
            let ch = if y % 2 == 0 { 'L' } else { 'N' };
            line.extend(std::iter::repeat(ch).take(8));
        }
        let rec = TilingRecord::parse(&line).unwrap();
        for (x, y, sym) in rec.iter() {
            let want = if y % 2 == 0 { Symbol::L } else { Symbol::N };
            assert_eq!(sym, want, "cell ({x}, {y})");
            assert_eq!(rec.symbol_at(x, y), want);
        }
    }

    #[test]
    fn parse_strips_crlf_but_keeps_spaces() {
        let line = " ".repeat(64) + "\r\n";
        let rec = TilingRecord::parse(&line).unwrap();
        assert_eq!(rec, TilingRecord::filled(Symbol::Empty));
    }

    #[test]
    fn trailing_spaces_count_as_cells() {
        // 60 letters plus four blanks is a complete record.
        let line = "U".repeat(60) + "    ";
        let rec = TilingRecord::parse(&line).unwrap();
        // Offset 60 is (4, 7), the first blank; offset 59 is (3, 7).
        assert_eq!(rec.symbol_at(3, 7), Symbol::U);
        for x in 4..8 {
            assert_eq!(rec.symbol_at(x, 7), Symbol::Empty, "cell ({x}, 7)");
        }
        assert_eq!(rec.symbol_at(7, 6), Symbol::U);
    }

    #[test]
    fn parse_ignores_characters_past_the_grid() {
        let line = "T".repeat(64) + "???";
        assert_eq!(
            TilingRecord::parse(&line).unwrap(),
            TilingRecord::filled(Symbol::T)
        );
    }

    #[test]
    fn short_record_is_rejected_without_padding() {
        let err = TilingRecord::parse(&"F".repeat(63)).unwrap_err();
        assert!(matches!(err, DrawError::RecordTooShort { len: 63 }));

        let err = TilingRecord::parse("\n").unwrap_err();
        assert!(matches!(err, DrawError::RecordTooShort { len: 0 }));
    }

    #[test]
    fn short_record_wins_over_unknown_symbol() {
        let err = TilingRecord::parse("?").unwrap_err();
        assert!(matches!(err, DrawError::RecordTooShort { len: 1 }));
    }

    #[test]
    fn first_unknown_symbol_is_reported() {
        let mut line: Vec<char> = "W".repeat(64).chars().collect();
        line[40] = '?';
        line[10] = 'q';
        let line: String = line.into_iter().collect();
        let err = TilingRecord::parse(&line).unwrap_err();
        assert!(matches!(
            err,
            DrawError::UnknownSymbol {
                symbol: 'q',
                offset: 10
            }
        ));
    }

    #[test]
    fn multibyte_characters_count_as_single_cells() {
        let line = "é".repeat(64);
        let err = TilingRecord::parse(&line).unwrap_err();
        assert!(matches!(
            err,
            DrawError::UnknownSymbol {
                symbol: 'é',
                offset: 0
            }
        ));
    }

    #[test]
    fn display_writes_the_record_back() {
        let line = "F".repeat(32) + &"I".repeat(28) + "    ";
        let rec = TilingRecord::parse(&line).unwrap();
        assert_eq!(rec.to_string(), line);
    }

    #[test]
    #[should_panic]
    fn symbol_at_off_grid_panics() {
        TilingRecord::filled(Symbol::X).symbol_at(8, 0);
    }
}
