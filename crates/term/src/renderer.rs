//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite the runs of
//! cells that changed. Consecutive tilings usually share most of their tiles,
//! so diffs stay small.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    // Only the stdout renderer owns the tty's raw mode.
    raw_mode: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self {
            raw_mode: true,
            ..Self::with_writer(io::stdout())
        }
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            raw_mode: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// If the screen setup fails, raw mode is turned back off before the error
    /// is returned.
    pub fn enter(&mut self) -> io::Result<()> {
        if self.raw_mode {
            terminal::enable_raw_mode()?;
        }
        let entered = self.enter_screen();
        undo_on_err(entered, || self.leave_raw_mode())
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    fn leave_raw_mode(&self) -> io::Result<()> {
        if self.raw_mode {
            terminal::disable_raw_mode()
        } else {
            Ok(())
        }
    }

    /// Restore the terminal to the state it had before [`enter`](Self::enter).
    pub fn exit(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        self.last = None;
        self.leave_raw_mode()
    }

    /// Draw `fb`, then keep it as the baseline for the next diff.
    pub fn draw(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

/// Run `undo` when `step` failed, then hand back `step`'s result.
///
/// An error from `undo` is dropped in favor of the original one.
fn undo_on_err<T>(step: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if step.is_err() {
        let _ = undo();
    }
    step
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_cells(out, fb.row(y), &mut style)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    let mut style = None;
    for run in changed_runs(prev, next) {
        let start = run.x as usize;
        let cells = &next.row(run.y)[start..start + run.len as usize];
        out.queue(cursor::MoveTo(run.x, run.y))?;
        write_cells(out, cells, &mut style)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Runs of cells that differ between two frames, row by row.
///
/// Frames of different sizes are reported as fully dirty.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        if !same_size {
            runs.push(Run {
                x: 0,
                y,
                len: next.width(),
            });
            continue;
        }

        let mut open: Option<u16> = None;
        for (x, (a, b)) in prev.row(y).iter().zip(next.row(y)).enumerate() {
            let x = x as u16;
            match (a != b, open) {
                (true, None) => open = Some(x),
                (false, Some(start)) => {
                    runs.push(Run {
                        x: start,
                        y,
                        len: x - start,
                    });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            runs.push(Run {
                x: start,
                y,
                len: next.width() - start,
            });
        }
    }
    runs
}

fn write_cells(
    out: &mut Vec<u8>,
    cells: &[Cell],
    current: &mut Option<CellStyle>,
) -> io::Result<()> {
    for cell in cells {
        if *current != Some(cell.style) {
            out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
