//! AnimationDriver: runs one frame of the pipeline per scheduler callback.
//!
//! Per frame: measure the delta, compute matrices from the current rotation,
//! draw, advance the rotation, read the framebuffer back, recolor the grid,
//! and every 10th frame rewrite the FPS caption.

use log::{debug, info, trace};

use crate::backend::RenderBackend;
use crate::core::overlay::Caption;
use crate::core::{
    cells_caption, compute_matrices, fps_caption, fps_from_delta, map_to_grid, write_text,
    CubeMesh, FrameTick, FrameTiming, Grid, RotationState,
};
use crate::core::types::TITLE_TEXT;
use crate::error::RenderError;
use crate::sampler::{FramebufferSampler, RowOrder};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub tick: FrameTick,
    /// Rotation used for this frame's matrices, in seconds.
    pub rotation_secs: f64,
    /// FPS caption written this frame, if any.
    pub fps_refreshed: Option<Caption>,
}

/// Rows used by the overlay captions on a grid of height `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRows {
    pub title: u16,
    pub cells: u16,
    pub fps: u16,
}

impl OverlayRows {
    pub fn for_height(height: u16) -> Self {
        let center = height / 2;
        Self {
            title: center,
            cells: center.saturating_add(1),
            fps: center.saturating_add(2),
        }
    }
}

pub struct AnimationDriver<B: RenderBackend> {
    backend: B,
    sampler: FramebufferSampler,
    grid: Grid,
    rotation: RotationState,
    timing: FrameTiming,
    rows: OverlayRows,
    aspect: f32,
    last_fps: Option<u32>,
}

impl<B: RenderBackend> AnimationDriver<B> {
    /// Upload `mesh`, build a grid matching the backend's target and write
    /// the static captions.
    ///
    /// Fails if the backend rejects the mesh; the loop must not start then.
    pub fn new(mut backend: B, mesh: CubeMesh, row_order: RowOrder) -> Result<Self, RenderError> {
        let (width, height) = backend.size();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTarget { width, height });
        }

        let (vertices, indices) = (mesh.vertex_count(), mesh.index_count());
        backend.upload(mesh)?;
        info!(
            "uploaded cube mesh ({} vertices, {} indices) to a {}x{} target",
            vertices, indices, width, height
        );

        let mut grid = Grid::new(width, height);
        let rows = OverlayRows::for_height(height);
        write_text(&mut grid, rows.title, TITLE_TEXT);
        let cells = cells_caption(grid.cell_count());
        write_text(&mut grid, rows.cells, &cells);

        Ok(Self {
            aspect: backend.aspect(),
            sampler: FramebufferSampler::new(width, height, row_order),
            backend,
            grid,
            rotation: RotationState::new(),
            timing: FrameTiming::new(),
            rows,
            last_fps: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn frame_counter(&self) -> u64 {
        self.timing.frame_counter()
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    pub fn overlay_rows(&self) -> OverlayRows {
        self.rows
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Process the scheduler callback fired at `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Result<FrameReport, RenderError> {
        let tick = self.timing.tick(timestamp_ms);

        let rotation_secs = self.rotation.seconds();
        let matrices = compute_matrices(&self.rotation, self.aspect);
        self.backend.draw(&matrices)?;
        self.rotation.advance(tick.delta_secs());

        let pixels = self.sampler.sample(&self.backend)?;
        map_to_grid(&mut self.grid, pixels);

        let fps_refreshed = if tick.refresh_fps {
            self.last_fps = fps_from_delta(tick.delta_ms);
            let caption = fps_caption(self.last_fps);
            write_text(&mut self.grid, self.rows.fps, &caption);
            debug!("frame {}: {}", tick.frame, caption);
            Some(caption)
        } else {
            None
        };

        trace!(
            "frame {} delta={:.3}ms rotation={:.4}s",
            tick.frame,
            tick.delta_ms,
            rotation_secs
        );

        Ok(FrameReport {
            tick,
            rotation_secs,
            fps_refreshed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::SoftwareRasterizer;
    use crate::core::build_cube;
    use crate::core::types::{GRID_HEIGHT, GRID_WIDTH};

    fn driver() -> AnimationDriver<SoftwareRasterizer> {
        let backend = SoftwareRasterizer::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        AnimationDriver::new(backend, build_cube(), RowOrder::BottomUp).unwrap()
    }

    #[test]
    fn static_captions_are_written_at_startup() {
        let d = driver();
        assert_eq!(d.overlay_rows(), OverlayRows { title: 32, cells: 33, fps: 34 });
        assert!(d.grid().row_text(33).contains("Cells:\u{a0}4096"));
        assert!(d.grid().row_text(32).contains("Software\u{a0}3D"));
    }

    #[test]
    fn rotation_lags_one_frame_behind_time() {
        let mut d = driver();
        let r0 = d.on_frame(100.0).unwrap();
        assert_eq!(r0.rotation_secs, 0.0);
        assert_eq!(r0.tick.delta_ms, 100.0);

        let r1 = d.on_frame(116.0).unwrap();
        assert!((r1.rotation_secs - 0.1).abs() < 1e-12);
        assert!((d.rotation().seconds() - 0.116).abs() < 1e-12);
    }

    #[test]
    fn fps_caption_refreshes_on_tenth_frames_only() {
        let mut d = driver();
        let mut refreshed = Vec::new();
        for i in 0..21u32 {
            let report = d.on_frame(f64::from(i + 1) * 20.0).unwrap();
            if let Some(caption) = report.fps_refreshed {
                refreshed.push((report.tick.frame, caption.to_string()));
            }
        }
        assert_eq!(
            refreshed,
            vec![
                (0, "FPS: 50".to_string()),
                (10, "FPS: 50".to_string()),
                (20, "FPS: 50".to_string()),
            ]
        );
        assert_eq!(d.frame_counter(), 21);
        assert_eq!(d.last_fps(), Some(50));
    }

    #[test]
    fn fps_caption_persists_between_refreshes() {
        let mut d = driver();
        d.on_frame(10.0).unwrap(); // frame 0: 100 FPS
        let row = d.grid().row_text(34);
        assert!(row.contains("FPS:\u{a0}100"));

        for i in 1..10 {
            d.on_frame(10.0 + f64::from(i) * 40.0).unwrap();
            assert_eq!(d.grid().row_text(34), row);
        }
    }

    #[test]
    fn grid_colors_match_backend_pixels() {
        let mut d = driver();
        d.on_frame(500.0).unwrap();
        d.on_frame(533.0).unwrap();
        let pixels = d.backend().color_buffer();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let o = crate::core::pixel_index(GRID_WIDTH, x, y);
                let c = d.grid().get(x, y).unwrap().color;
                assert_eq!([c.r, c.g, c.b], [pixels[o], pixels[o + 1], pixels[o + 2]]);
            }
        }
    }

    #[test]
    fn rejected_mesh_aborts_construction() {
        let backend = SoftwareRasterizer::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        let mut mesh = build_cube();
        mesh.indices.push(200);
        let err = AnimationDriver::new(backend, mesh, RowOrder::BottomUp).err();
        assert!(matches!(err, Some(RenderError::InvalidMesh(_))));
    }
}
