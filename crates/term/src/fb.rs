//! Terminal framebuffer: the character cells actually sent to the terminal.

use crate::types::Rgb;

/// Foreground/background pair of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn on(bg: Rgb, fg: Rgb) -> Self {
        Self { fg, bg }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::on(Rgb::BLACK, Rgb::new(220, 220, 220))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Fixed-size, row-major grid of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize)
    }

    /// Iterate `(y, row)` pairs from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (u16, &[Cell])> + '_ {
        (0..self.height).filter_map(move |y| self.row(y).map(|r| (y, r)))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Text of one row, for inspection in tests and logs.
    pub fn row_string(&self, y: u16) -> String {
        self.row(y)
            .map(|r| r.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
