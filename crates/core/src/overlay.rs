//! Overlay text layout: two source characters per grid cell.
//!
//! Layout is a pure function from `(row, text)` to a list of cell writes;
//! [`write_text`] applies them to a grid. Each call overwrites the text slot
//! of a fixed set of cells and keeps no state, so repeated calls with the
//! same input are idempotent.

use std::fmt::Write as _;

use arrayvec::{ArrayString, ArrayVec};

use crate::grid::{CellText, Grid};
use crate::types::{BLANK_GLYPH, CHARS_PER_CELL, GRID_WIDTH};

/// Most writes a single row layout can produce.
pub const MAX_ROW_WRITES: usize = GRID_WIDTH as usize;

/// One packed chunk of text destined for cell `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphWrite {
    pub x: u16,
    pub y: u16,
    pub text: CellText,
}

pub type RowWrites = ArrayVec<GlyphWrite, MAX_ROW_WRITES>;

/// Short caption rendered without heap allocation.
pub type Caption = ArrayString<32>;

#[inline]
fn normalize(ch: char) -> char {
    if ch == ' ' {
        BLANK_GLYPH
    } else {
        ch
    }
}

/// First column of a caption of `char_len` characters: `floor(W/2 - len/4)`.
///
/// Centers the text assuming two characters per cell. May be negative for
/// captions wider than the grid.
pub fn start_column(grid_width: u16, char_len: usize) -> i64 {
    ((grid_width as f64) / 2.0 - (char_len as f64) / 4.0).floor() as i64
}

/// Lay out `text` on `row` of a grid `grid_width` cells wide.
///
/// Spaces become [`BLANK_GLYPH`]. One cell is written per source character:
/// the first `ceil(len/2)` cells carry the packed text (an odd-length text
/// ends with a one-char chunk) and the rest get empty text, which clears what
/// a longer caption left behind. Cells outside the grid are dropped.
pub fn layout_text(grid_width: u16, row: u16, text: &str) -> RowWrites {
    let mut writes = RowWrites::new();
    let len = text.chars().count();
    let start = start_column(grid_width, len);
    let mut chars = text.chars().map(normalize);

    for i in 0..len {
        // Consume the chunk even when the cell is clipped, to keep alignment.
        let chunk = CellText::from_chars(chars.by_ref().take(CHARS_PER_CELL));
        let col = start + i as i64;
        if col < 0 {
            continue;
        }
        if col >= grid_width as i64 {
            break;
        }
        let write = GlyphWrite {
            x: col as u16,
            y: row,
            text: chunk,
        };
        if writes.try_push(write).is_err() {
            break;
        }
    }

    writes
}

/// Write `text` centered on `row`, replacing the text of the covered cells.
pub fn write_text(grid: &mut Grid, row: u16, text: &str) {
    for w in layout_text(grid.width(), row, text) {
        grid.set_text(w.x, w.y, w.text);
    }
}

/// Frames per second for a frame that took `delta_ms`: `floor(1000 / delta)`.
///
/// `None` when the delta is not a positive finite number.
pub fn fps_from_delta(delta_ms: f64) -> Option<u32> {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        Some((1000.0 / delta_ms).floor() as u32)
    } else {
        None
    }
}

/// `"FPS: n"`, or `"FPS: --"` when no rate could be measured.
pub fn fps_caption(fps: Option<u32>) -> Caption {
    let mut s = Caption::new();
    let written = match fps {
        Some(n) => write!(s, "FPS: {}", n),
        None => write!(s, "FPS: --"),
    };
    debug_assert!(written.is_ok(), "FPS caption exceeds capacity");
    s
}

/// `"Cells: n"`.
pub fn cells_caption(cell_count: usize) -> Caption {
    let mut s = Caption::new();
    let written = write!(s, "Cells: {}", cell_count);
    debug_assert!(written.is_ok(), "cells caption exceeds capacity");
    s
}
