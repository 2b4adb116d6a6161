//! Framebuffer read-back into addressable memory.

use crate::backend::RenderBackend;
use crate::core::types::BYTES_PER_PIXEL;
use crate::error::RenderError;

/// Row order of the sampled buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Keep the backend's order: row 0 is the bottom of the image, so the
    /// grid shows the cube vertically mirrored.
    #[default]
    BottomUp,
    /// Flip rows after read-back so row 0 is the top of the image.
    TopDown,
}

/// Owns the RGBA read-back buffer for the frame loop.
///
/// The buffer is allocated once and fully overwritten by every
/// [`sample`](FramebufferSampler::sample); nothing carries over between frames.
pub struct FramebufferSampler {
    width: u16,
    height: u16,
    row_order: RowOrder,
    pixels: Vec<u8>,
}

impl FramebufferSampler {
    pub fn new(width: u16, height: u16, row_order: RowOrder) -> Self {
        let len = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            row_order,
            pixels: vec![0; len],
        }
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// Read the backend's current color buffer.
    pub fn sample<B: RenderBackend + ?Sized>(&mut self, backend: &B) -> Result<&[u8], RenderError> {
        backend.read_pixels(&mut self.pixels)?;
        if self.row_order == RowOrder::TopDown {
            flip_rows(&mut self.pixels, self.width, self.height);
        }
        Ok(&self.pixels)
    }
}

fn flip_rows(pixels: &mut [u8], width: u16, height: u16) {
    let stride = (width as usize) * BYTES_PER_PIXEL;
    let h = height as usize;
    for y in 0..h / 2 {
        let (upper, lower) = pixels.split_at_mut((h - 1 - y) * stride);
        upper[y * stride..(y + 1) * stride].swap_with_slice(&mut lower[..stride]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CubeMesh, FrameMatrices};

    /// Backend whose color buffer is a fixed byte pattern.
    struct PatternBackend {
        width: u16,
        height: u16,
    }

    impl RenderBackend for PatternBackend {
        fn size(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn upload(&mut self, _mesh: CubeMesh) -> Result<(), RenderError> {
            Ok(())
        }

        fn draw(&mut self, _matrices: &FrameMatrices) -> Result<(), RenderError> {
            Ok(())
        }

        fn read_pixels(&self, out: &mut [u8]) -> Result<(), RenderError> {
            for (i, b) in out.iter_mut().enumerate() {
                *b = (i / 4) as u8;
            }
            Ok(())
        }
    }

    #[test]
    fn bottom_up_keeps_backend_order() {
        let backend = PatternBackend { width: 2, height: 3 };
        let mut s = FramebufferSampler::new(2, 3, RowOrder::BottomUp);
        let px = s.sample(&backend).unwrap();
        assert_eq!(px.len(), 24);
        assert_eq!(px[0], 0);
        assert_eq!(px[20], 5);
    }

    #[test]
    fn top_down_flips_rows() {
        let backend = PatternBackend { width: 2, height: 3 };
        let mut s = FramebufferSampler::new(2, 3, RowOrder::TopDown);
        let px = s.sample(&backend).unwrap();
        let firsts: Vec<u8> = px.chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(firsts, vec![4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn sampling_twice_does_not_accumulate_flips() {
        let backend = PatternBackend { width: 1, height: 2 };
        let mut s = FramebufferSampler::new(1, 2, RowOrder::TopDown);
        let first = s.sample(&backend).unwrap().to_vec();
        let second = s.sample(&backend).unwrap().to_vec();
        assert_eq!(first, second);
    }
}
