//! Core frame-pipeline logic - pure, deterministic, and testable
//!
//! This crate holds everything about a frame that is not I/O:
//!
//! - [`geometry`]: the 24-vertex, 36-index flat-colored cube
//! - [`transform`]: rotation state and the projection / model-view matrices
//! - [`grid`]: the 64x64 display grid and the framebuffer-to-grid mapper
//! - [`overlay`]: two-chars-per-cell caption layout and FPS formatting
//! - [`timing`]: frame delta measurement and the every-10th-frame FPS gate
//!
//! It has no dependency on the terminal or the rasterizer, so every rule can
//! be exercised from unit tests.
//!
//! # Example
//!
//! ```
//! use cube_grid_core::{compute_matrices, map_to_grid, write_text, Grid, RotationState};
//! use cube_grid_core::types::FRAMEBUFFER_LEN;
//!
//! let mut rotation = RotationState::new();
//! let _matrices = compute_matrices(&rotation, 1.0);
//! rotation.advance(0.016);
//!
//! let mut grid = Grid::default();
//! map_to_grid(&mut grid, &vec![0u8; FRAMEBUFFER_LEN]);
//! write_text(&mut grid, 34, "FPS: 30");
//! assert_eq!(grid.get(30, 34).unwrap().text.as_str(), "FP");
//! ```

pub mod geometry;
pub mod grid;
pub mod overlay;
pub mod timing;
pub mod transform;

pub use cube_grid_types as types;

pub use geometry::{build_cube, CubeMesh, INDEX_COUNT, VERTEX_COUNT};
pub use grid::{map_to_grid, pixel_index, CellText, Grid, GridCell};
pub use overlay::{
    cells_caption, fps_caption, fps_from_delta, layout_text, start_column, write_text, Caption,
    GlyphWrite, RowWrites,
};
pub use timing::{FrameTick, FrameTiming};
pub use transform::{compute_matrices, AxisAngles, FrameMatrices, RotationState};
