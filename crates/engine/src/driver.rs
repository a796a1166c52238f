//! Batch driver: one image per input line, in arrival order.

use std::io::BufRead;

use crate::config::DrawConfig;
use crate::core::{Display, DrawError, Palette};
use crate::sink::PngSink;
use crate::tile_renderer::TileRenderer;

/// Render every line of `input` and save it as `tiling_<n>.png`.
///
/// Returns the number of images written. The first failure of any kind ends
/// the run; nothing is retried or skipped.
pub fn run<R: BufRead, D: Display>(
    input: R,
    renderer: &mut TileRenderer<D>,
    sink: &PngSink,
) -> Result<usize, DrawError> {
    let mut written = 0;
    for (n, line) in input.lines().enumerate() {
        let line = line.map_err(DrawError::Input)?;
        renderer.render(&line)?;
        let path = sink.save(n, renderer.canvas())?;
        log::debug!("wrote {}", path.display());
        written += 1;
    }
    Ok(written)
}

/// Build the renderer and sink described by `config`, run the batch and close
/// the display.
pub fn run_with_config<R: BufRead>(config: &DrawConfig, input: R) -> Result<usize, DrawError> {
    log::info!(
        "rendering tilings into {} ({:?} preview)",
        config.output_dir.display(),
        config.preview
    );
    let sink = PngSink::new(config.output_dir.clone());
    let mut renderer = TileRenderer::new(Palette::default(), config.display())?;

    let result = run(input, &mut renderer, &sink);
    let closed = renderer.finish();
    let written = result?;
    closed?;

    log::info!("wrote {written} image(s)");
    Ok(written)
}
