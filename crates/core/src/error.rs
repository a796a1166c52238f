//! Error type shared by every stage of the draw pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CELL_COUNT;

#[derive(Debug, Error)]
pub enum DrawError {
    /// The display surface could not be opened.
    #[error("display initialization failed: {0}")]
    Initialization(String),

    /// A record character has no palette entry.
    #[error("unknown tiling symbol {symbol:?} at offset {offset}")]
    UnknownSymbol { symbol: char, offset: usize },

    #[error("tiling record has {len} cells, expected {}", CELL_COUNT)]
    RecordTooShort { len: usize },

    /// The display failed after it was opened.
    #[error("display error: {0}")]
    Display(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read tiling input: {0}")]
    Input(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_symbol_and_offset() {
        let err = DrawError::UnknownSymbol {
            symbol: '?',
            offset: 17,
        };
        assert_eq!(err.to_string(), "unknown tiling symbol '?' at offset 17");
    }

    #[test]
    fn short_record_message_reports_expected_length() {
        let err = DrawError::RecordTooShort { len: 3 };
        assert_eq!(err.to_string(), "tiling record has 3 cells, expected 64");
    }

    #[test]
    fn io_errors_name_the_path() {
        let err = DrawError::Io {
            path: PathBuf::from("images/tiling_0.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("images/tiling_0.png"));
    }
}
