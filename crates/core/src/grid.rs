//! Display grid and the framebuffer-to-grid color mapper.
//!
//! The grid is the model of the display surface: a fixed `W x H` matrix of
//! cells, each holding a background color and up to two characters of
//! overlay text. It is created once and mutated in place every frame.

use arrayvec::ArrayString;

use crate::types::{Rgb, BLANK_GLYPH, BYTES_PER_PIXEL, CHARS_PER_CELL, GRID_HEIGHT, GRID_WIDTH};

/// Up to [`CHARS_PER_CELL`] characters of text shown in one cell.
///
/// Stored inline (4 bytes per char worst case) so overlay writes never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellText(ArrayString<{ CHARS_PER_CELL * 4 }>);

impl CellText {
    /// Two blank glyphs: the resting content of every cell.
    pub fn blank() -> Self {
        let mut s = ArrayString::new();
        for _ in 0..CHARS_PER_CELL {
            s.push(BLANK_GLYPH);
        }
        Self(s)
    }

    /// Take at most [`CHARS_PER_CELL`] characters from `chars`.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut s = ArrayString::new();
        for ch in chars.into_iter().take(CHARS_PER_CELL) {
            s.push(ch);
        }
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Default for CellText {
    fn default() -> Self {
        Self::blank()
    }
}

/// One addressable unit of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCell {
    pub color: Rgb,
    pub text: CellText,
}

/// Fixed-size matrix of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![GridCell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Byte length of an RGBA framebuffer matching this grid.
    pub fn framebuffer_len(&self) -> usize {
        self.cells.len() * BYTES_PER_PIXEL
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&GridCell> {
        self.idx(x, y).map(|i| &self.cells[i])
    }

    pub fn set_color(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].color = color;
        }
    }

    pub fn set_text(&mut self, x: u16, y: u16, text: CellText) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].text = text;
        }
    }

    /// Concatenated text of one row, blank glyphs included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.text.as_str())
            .collect()
    }
}

/// Byte offset of the pixel backing cell `(x, y)` in an RGBA buffer `width` pixels wide.
#[inline(always)]
pub fn pixel_index(width: u16, x: u16, y: u16) -> usize {
    ((y as usize) * (width as usize) + (x as usize)) * BYTES_PER_PIXEL
}

/// Recolor every cell from the RGBA `pixels` read back for this frame.
///
/// Walks rows then columns; alpha is discarded. `pixels` must hold exactly
/// [`Grid::framebuffer_len`] bytes.
pub fn map_to_grid(grid: &mut Grid, pixels: &[u8]) {
    debug_assert_eq!(pixels.len(), grid.framebuffer_len());

    let width = grid.width;
    for y in 0..grid.height {
        for x in 0..width {
            let idx = pixel_index(width, x, y);
            let r = pixels[idx];
            let g = pixels[idx + 1];
            let b = pixels[idx + 2];
            let cell = (y as usize) * (width as usize) + (x as usize);
            grid.cells[cell].color = Rgb::new(r, g, b);
        }
    }
}
