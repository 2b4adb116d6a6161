//! Terminal presentation of the display grid.
//!
//! The grid is rendered into a simple framebuffer of styled character cells
//! that is then flushed to the terminal with crossterm, redrawing only the
//! cells that changed since the previous frame.
//!
//! - [`GridView`] maps grid cells to terminal cells (2 columns per cell)
//! - [`FrameBuffer`] holds the terminal cells of one frame
//! - [`TerminalRenderer`] owns raw mode / alternate screen and writes frames

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use cube_grid_core as core;
pub use cube_grid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use grid_view::GridView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
