//! Cube grid (workspace facade crate).
//!
//! Renders a rotating cube offscreen and redraws every frame as a 64x64 grid
//! of colored terminal cells with a small text overlay. The implementation
//! lives in dedicated crates under `crates/`; this package re-exports them as
//! `cube_grid::{core,engine,input,term,types}`.

pub use cube_grid_core as core;
pub use cube_grid_engine as engine;
pub use cube_grid_input as input;
pub use cube_grid_term as term;
pub use cube_grid_types as types;
