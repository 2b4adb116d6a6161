//! GridView: maps the display grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each grid cell becomes `cell_w` terminal columns on one row. With the
//! default width of 2 the cells look roughly square and each column shows one
//! of the cell's two packed text characters.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BLANK_GLYPH, CHARS_PER_CELL};

/// Backgrounds brighter than this get dark text.
const LIGHT_BG_LUMA: u8 = 140;

const LIGHT_TEXT: Rgb = Rgb::new(230, 230, 230);
const DARK_TEXT: Rgb = Rgb::new(16, 16, 16);

pub struct GridView {
    /// Terminal columns per grid cell.
    cell_w: u16,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            cell_w: CHARS_PER_CELL as u16,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Framebuffer size needed to show `grid`.
    pub fn framebuffer_size(&self, grid: &Grid) -> (u16, u16) {
        (grid.width().saturating_mul(self.cell_w), grid.height())
    }

    /// Render `grid` into an existing framebuffer of [`framebuffer_size`](Self::framebuffer_size).
    ///
    /// Allocation-free; callers reuse one framebuffer across frames.
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Some(cell) = grid.get(x, y) else {
                    continue;
                };
                let style = CellStyle {
                    fg: text_color_for(cell.color),
                    bg: cell.color,
                };
                let mut chars = cell.text.as_str().chars();
                for dx in 0..self.cell_w {
                    // A missing partner char is shown as an empty column.
                    let ch = match chars.next() {
                        Some(BLANK_GLYPH) | None => ' ',
                        Some(ch) => ch,
                    };
                    fb.put_char(x * self.cell_w + dx, y, ch, style);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let (w, h) = self.framebuffer_size(grid);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(grid, &mut fb);
        fb
    }
}

fn text_color_for(bg: Rgb) -> Rgb {
    if bg.luma() > LIGHT_BG_LUMA {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
