//! PNG output for rendered canvases.

use std::path::PathBuf;

use image::{ImageError, ImageFormat};

use crate::core::{Canvas, DrawError};

/// Writes canvases as `tiling_<n>.png` into a fixed directory.
///
/// The directory must already exist; it is never created here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngSink {
    dir: PathBuf,
}

impl PngSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("tiling_{index}.png"))
    }

    /// Encode `canvas` as the `index`-th image, overwriting any existing file.
    pub fn save(&self, index: usize, canvas: &Canvas) -> Result<PathBuf, DrawError> {
        let path = self.path_for(index);
        match canvas.image().save_with_format(&path, ImageFormat::Png) {
            Ok(()) => Ok(path),
            Err(ImageError::IoError(source)) => Err(DrawError::Io { path, source }),
            Err(source) => Err(DrawError::Encode { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn paths_are_zero_based_and_sequential() {
        let sink = PngSink::new("images");
        assert_eq!(sink.path_for(0), Path::new("images/tiling_0.png"));
        assert_eq!(sink.path_for(12), Path::new("images/tiling_12.png"));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join(format!(
            "pentomino-draw-missing-{}",
            std::process::id()
        ));
        let sink = PngSink::new(dir.join("nope"));
        let err = sink.save(0, &Canvas::new()).unwrap_err();
        match err {
            DrawError::Io { path, .. } => assert_eq!(path, sink.path_for(0)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
