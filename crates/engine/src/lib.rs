//! Frame engine: render backend, read-back and the animation loop.
//!
//! - [`backend`]: the [`RenderBackend`] contract (upload, draw, read pixels)
//! - [`raster`]: [`SoftwareRasterizer`], a CPU implementation of that contract
//! - [`sampler`]: [`FramebufferSampler`], the per-frame RGBA read-back
//! - [`driver`]: [`AnimationDriver`], one pipeline pass per frame callback
//! - [`schedule`]: schedulers, the stop signal and the [`run`] loop
//! - [`config`]: [`SessionConfig`] read from the environment
//!
//! Everything runs on one thread: a frame completes before the next one is
//! requested, so no state here is shared or locked.

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod raster;
pub mod sampler;
pub mod schedule;

pub use cube_grid_core as core;
pub use cube_grid_core::types;

pub use backend::RenderBackend;
pub use config::SessionConfig;
pub use driver::{AnimationDriver, FrameReport, OverlayRows};
pub use error::RenderError;
pub use raster::SoftwareRasterizer;
pub use sampler::{FramebufferSampler, RowOrder};
pub use schedule::{run, IntervalScheduler, Scheduler, ScriptedScheduler, StopHandle};
