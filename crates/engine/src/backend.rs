//! Render backend contract.

use crate::core::{CubeMesh, FrameMatrices};
use crate::error::RenderError;

/// Offscreen rasterizer consumed by the animation driver.
///
/// A backend owns a fixed-size RGBA color buffer. The expected lifecycle is
/// one [`upload`](RenderBackend::upload) at startup followed by alternating
/// [`draw`](RenderBackend::draw) / [`read_pixels`](RenderBackend::read_pixels)
/// calls, one pair per frame.
pub trait RenderBackend {
    /// Color buffer size in pixels, `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Take ownership of the mesh and prepare it for drawing.
    ///
    /// Validation failures here are the backend's equivalent of a shader
    /// compile/link failure and abort startup.
    fn upload(&mut self, mesh: CubeMesh) -> Result<(), RenderError>;

    /// Clear color and depth, then draw every uploaded triangle.
    fn draw(&mut self, matrices: &FrameMatrices) -> Result<(), RenderError>;

    /// Copy the color buffer into `out` as RGBA bytes, row 0 at the bottom.
    fn read_pixels(&self, out: &mut [u8]) -> Result<(), RenderError>;

    /// Viewport aspect ratio, width over height.
    fn aspect(&self) -> f32 {
        let (w, h) = self.size();
        w as f32 / h as f32
    }
}
