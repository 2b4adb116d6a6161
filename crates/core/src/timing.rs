//! Frame timing: delta measurement and the FPS refresh gate.

use crate::types::FPS_REFRESH_INTERVAL;

/// Outcome of one timing tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Index of the frame being processed (0 for the first callback).
    pub frame: u64,
    /// Milliseconds since the previous callback (or since 0 on the first).
    pub delta_ms: f64,
    /// Whether this frame refreshes the FPS caption.
    pub refresh_fps: bool,
}

impl FrameTick {
    pub fn delta_secs(&self) -> f64 {
        self.delta_ms * 0.001
    }
}

/// Last callback timestamp and frame counter.
///
/// The first delta is measured against a timestamp of 0, so the opening
/// frame usually reports a large delta.
#[derive(Debug, Clone, Default)]
pub struct FrameTiming {
    last_timestamp_ms: f64,
    frame_counter: u64,
}

impl FrameTiming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn last_timestamp_ms(&self) -> f64 {
        self.last_timestamp_ms
    }

    /// Account for a callback at `timestamp_ms`.
    ///
    /// Returns the delta and FPS gate for the current frame, then increments
    /// the counter and stores the timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTick {
        let tick = FrameTick {
            frame: self.frame_counter,
            delta_ms: timestamp_ms - self.last_timestamp_ms,
            refresh_fps: self.frame_counter % FPS_REFRESH_INTERVAL == 0,
        };
        self.frame_counter += 1;
        self.last_timestamp_ms = timestamp_ms;
        tick
    }
}
