//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite runs of cells
//! that changed since the previous frame. The cube moves every frame but
//! most of the grid is background, so the diff stays small.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    ///
    /// Fails when stdout is not a usable terminal.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call `fb` holds the previous frame, ready to be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.same_size(fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cells, switching colors only when the style changes.
struct SegmentWriter<'a> {
    out: &'a mut Vec<u8>,
    current: Option<CellStyle>,
}

impl<'a> SegmentWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, current: None }
    }

    fn segment(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.current != Some(cell.style) {
                self.out.queue(SetColors(colors_for(cell.style)))?;
                self.current = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.current.is_some() {
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = SegmentWriter::new(out);
    for (y, row) in fb.rows() {
        w.segment(0, y, row)?;
    }
    w.finish()
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both framebuffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = SegmentWriter::new(out);
    for_each_changed_run(prev, next, |x, y, run| w.segment(x, y, run))?;
    w.finish()
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn colors_for(style: CellStyle) -> Colors {
    Colors::new(rgb_to_color(style.fg), rgb_to_color(style.bg))
}

/// Call `f(x, y, run)` for each maximal horizontal run of changed cells,
/// where `run` is the slice of new cells.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, &[Cell]) -> Result<()>,
) -> Result<()> {
    for ((y, a_row), (_, b_row)) in prev.rows().zip(next.rows()) {
        let mut x = 0;
        while x < b_row.len() {
            if a_row[x] == b_row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < b_row.len() && a_row[x] != b_row[x] {
                x += 1;
            }
            f(start as u16, y, &b_row[start..x])?;
        }
    }
    Ok(())
}
