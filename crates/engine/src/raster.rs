//! CPU rasterizer implementing [`RenderBackend`].
//!
//! Follows the fixed-function state of a minimal GL setup: clear to opaque
//! black, clear depth to 1.0, depth test `LEQUAL`, no face culling, GL
//! viewport transform with window row 0 at the bottom. Triangles are filled
//! with edge functions sampled at pixel centers, and vertex colors are
//! interpolated perspective-correctly.
//!
//! There is no near-plane clipping: a triangle with any vertex at or behind
//! the eye is dropped. The fixed cube never gets that close.

use glam::{Vec3, Vec4};

use crate::backend::RenderBackend;
use crate::core::types::BYTES_PER_PIXEL;
use crate::core::{CubeMesh, FrameMatrices};
use crate::error::RenderError;

const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];
const CLEAR_DEPTH: f32 = 1.0;
const MIN_W: f32 = 1e-6;

/// Window-space vertex ready for scan conversion.
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    /// Depth in `[0, 1]` when inside the clip volume.
    z: f32,
    inv_w: f32,
    color: Vec4,
}

pub struct SoftwareRasterizer {
    width: u16,
    height: u16,
    color: Vec<u8>,
    depth: Vec<f32>,
    mesh: Option<CubeMesh>,
    /// Per-vertex clip coordinates, reused every draw.
    clip: Vec<Vec4>,
}

impl SoftwareRasterizer {
    pub fn new(width: u16, height: u16) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTarget { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            color: vec![0; len * BYTES_PER_PIXEL],
            depth: vec![CLEAR_DEPTH; len],
            mesh: None,
            clip: Vec::new(),
        })
    }

    /// Raw color buffer, RGBA, row 0 at the bottom.
    pub fn color_buffer(&self) -> &[u8] {
        &self.color
    }

    fn clear(&mut self) {
        for px in self.color.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&CLEAR_COLOR);
        }
        self.depth.fill(CLEAR_DEPTH);
    }
}

fn validate_mesh(mesh: &CubeMesh) -> Result<(), RenderError> {
    if mesh.positions.len() != mesh.colors.len() {
        return Err(RenderError::InvalidMesh(format!(
            "{} positions but {} colors",
            mesh.positions.len(),
            mesh.colors.len()
        )));
    }
    if mesh.indices.is_empty() || mesh.indices.len() % 3 != 0 {
        return Err(RenderError::InvalidMesh(format!(
            "index count {} is not a positive multiple of 3",
            mesh.indices.len()
        )));
    }
    if let Some(&bad) = mesh
        .indices
        .iter()
        .find(|&&i| i as usize >= mesh.positions.len())
    {
        return Err(RenderError::InvalidMesh(format!(
            "index {} out of range for {} vertices",
            bad,
            mesh.positions.len()
        )));
    }
    Ok(())
}

impl RenderBackend for SoftwareRasterizer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn upload(&mut self, mesh: CubeMesh) -> Result<(), RenderError> {
        validate_mesh(&mesh)?;
        self.clip = Vec::with_capacity(mesh.positions.len());
        self.mesh = Some(mesh);
        Ok(())
    }

    fn draw(&mut self, matrices: &FrameMatrices) -> Result<(), RenderError> {
        if self.mesh.is_none() {
            return Err(RenderError::NotInitialized);
        }
        self.clear();

        let Self {
            width,
            height,
            color,
            depth,
            mesh: Some(mesh),
            clip,
        } = self
        else {
            return Err(RenderError::NotInitialized);
        };

        let mvp = matrices.model_view_projection();
        clip.clear();
        clip.extend(mesh.positions.iter().map(|p: &Vec3| mvp * p.extend(1.0)));

        let mut target = Target {
            width: *width,
            height: *height,
            color,
            depth,
        };
        for tri in mesh.triangles() {
            let verts = tri.map(|i| (clip[i as usize], mesh.colors[i as usize]));
            if let Some(screen) = to_screen(verts, *width, *height) {
                target.fill_triangle(&screen);
            }
        }
        Ok(())
    }

    fn read_pixels(&self, out: &mut [u8]) -> Result<(), RenderError> {
        if out.len() != self.color.len() {
            return Err(RenderError::BufferSize {
                expected: self.color.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.color);
        Ok(())
    }
}

/// Perspective divide + viewport transform. `None` if any vertex is behind the eye.
fn to_screen(verts: [(Vec4, Vec4); 3], width: u16, height: u16) -> Option<[ScreenVertex; 3]> {
    if verts.iter().any(|(c, _)| c.w <= MIN_W) {
        return None;
    }
    let (w, h) = (width as f32, height as f32);
    Some(verts.map(|(c, color)| {
        let inv_w = 1.0 / c.w;
        ScreenVertex {
            x: (c.x * inv_w + 1.0) * 0.5 * w,
            y: (c.y * inv_w + 1.0) * 0.5 * h,
            z: (c.z * inv_w + 1.0) * 0.5,
            inv_w,
            color,
        }
    }))
}

#[inline(always)]
fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

#[inline(always)]
fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

struct Target<'a> {
    width: u16,
    height: u16,
    color: &'a mut [u8],
    depth: &'a mut [f32],
}

impl Target<'_> {
    fn fill_triangle(&mut self, v: &[ScreenVertex; 3]) {
        let p0 = (v[0].x, v[0].y);
        let p1 = (v[1].x, v[1].y);
        let p2 = (v[2].x, v[2].y);
        let area = edge(p0, p1, p2);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let min_x = v.iter().map(|s| s.x).fold(f32::INFINITY, f32::min);
        let max_x = v.iter().map(|s| s.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = v.iter().map(|s| s.y).fold(f32::INFINITY, f32::min);
        let max_y = v.iter().map(|s| s.y).fold(f32::NEG_INFINITY, f32::max);

        let x0 = min_x.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().max(0.0) as usize).min(self.width as usize);
        let y0 = min_y.floor().max(0.0) as usize;
        let y1 = (max_y.ceil().max(0.0) as usize).min(self.height as usize);

        for py in y0..y1 {
            for px in x0..x1 {
                let p = (px as f32 + 0.5, py as f32 + 0.5);
                let b0 = edge(p1, p2, p) / area;
                let b1 = edge(p2, p0, p) / area;
                let b2 = edge(p0, p1, p) / area;
                if b0 < 0.0 || b1 < 0.0 || b2 < 0.0 {
                    continue;
                }

                let z = b0 * v[0].z + b1 * v[1].z + b2 * v[2].z;
                if !(0.0..=1.0).contains(&z) {
                    continue;
                }
                let i = py * (self.width as usize) + px;
                if z > self.depth[i] {
                    continue;
                }
                self.depth[i] = z;

                let q0 = b0 * v[0].inv_w;
                let q1 = b1 * v[1].inv_w;
                let q2 = b2 * v[2].inv_w;
                let c = (v[0].color * q0 + v[1].color * q1 + v[2].color * q2) / (q0 + q1 + q2);

                let o = i * BYTES_PER_PIXEL;
                self.color[o] = unit_to_byte(c.x);
                self.color[o + 1] = unit_to_byte(c.y);
                self.color[o + 2] = unit_to_byte(c.z);
                self.color[o + 3] = unit_to_byte(c.w);
            }
        }
    }
}
