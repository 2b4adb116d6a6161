use thiserror::Error;

/// Failures surfaced by a render backend or the frame pipeline.
///
/// Every variant is fatal: the pipeline never retries.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render target {width}x{height} is not usable")]
    InvalidTarget { width: u16, height: u16 },

    #[error("mesh rejected: {0}")]
    InvalidMesh(String),

    #[error("draw issued before a mesh was uploaded")]
    NotInitialized,

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
