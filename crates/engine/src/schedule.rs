//! Frame scheduling: the cooperative loop and its stop signal.
//!
//! The loop runs one frame to completion, then asks the scheduler for the
//! next timestamp. A scheduler returning `None` ends the loop; that is the
//! only way out apart from an error.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;

use crate::backend::RenderBackend;
use crate::core::Grid;
use crate::driver::{AnimationDriver, FrameReport};

/// Source of frame callbacks.
pub trait Scheduler {
    /// Block until the next frame is due and return its timestamp in
    /// milliseconds, or `None` once the loop should stop.
    fn next_frame(&mut self) -> Result<Option<f64>>;
}

/// Shared stop flag checked before every re-arm.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fixed-cadence scheduler driven by a monotonic clock.
///
/// Timestamps are milliseconds since `origin`, which callers capture before
/// startup so the first frame's delta covers the time spent getting there.
/// The first frame is due as soon as the scheduler exists.
///
/// `wait` is called with the time left until the next deadline. It may return
/// early (e.g. when a terminal event arrives); the scheduler keeps waiting
/// until the deadline unless a stop was requested meanwhile.
pub struct IntervalScheduler<W> {
    origin: Instant,
    interval: Duration,
    next_deadline: Instant,
    stop: StopHandle,
    max_frames: Option<u64>,
    issued: u64,
    wait: W,
}

impl<W> IntervalScheduler<W>
where
    W: FnMut(Duration) -> Result<()>,
{
    pub fn new(
        origin: Instant,
        interval: Duration,
        stop: StopHandle,
        max_frames: Option<u64>,
        wait: W,
    ) -> Self {
        Self {
            origin,
            interval,
            next_deadline: Instant::now(),
            stop,
            max_frames,
            issued: 0,
            wait,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    fn exhausted(&self) -> bool {
        self.stop.is_stopped() || self.max_frames.is_some_and(|max| self.issued >= max)
    }
}

impl<W> Scheduler for IntervalScheduler<W>
where
    W: FnMut(Duration) -> Result<()>,
{
    fn next_frame(&mut self) -> Result<Option<f64>> {
        loop {
            if self.exhausted() {
                return Ok(None);
            }
            let now = Instant::now();
            if now >= self.next_deadline {
                break;
            }
            (self.wait)(self.next_deadline - now)?;
        }

        let now = Instant::now();
        self.next_deadline += self.interval;
        if self.next_deadline < now {
            // Fell behind; re-arm from now instead of bursting to catch up.
            self.next_deadline = now + self.interval;
        }
        self.issued += 1;
        Ok(Some(now.saturating_duration_since(self.origin).as_secs_f64() * 1000.0))
    }
}

/// Scheduler replaying a fixed list of timestamps. Used for headless runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedScheduler {
    timestamps: VecDeque<f64>,
}

impl ScriptedScheduler {
    pub fn new(timestamps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
        }
    }

    /// `count` timestamps spaced `interval_ms` apart, starting at `interval_ms`.
    pub fn uniform(count: usize, interval_ms: f64) -> Self {
        Self::new((1..=count).map(|i| i as f64 * interval_ms))
    }
}

impl Scheduler for ScriptedScheduler {
    fn next_frame(&mut self) -> Result<Option<f64>> {
        Ok(self.timestamps.pop_front())
    }
}

/// Drive `driver` until the scheduler stops, presenting every frame.
///
/// Returns the number of frames rendered. Any error from the pipeline or the
/// presenter ends the loop immediately.
pub fn run<B, S, P>(driver: &mut AnimationDriver<B>, scheduler: &mut S, mut present: P) -> Result<u64>
where
    B: RenderBackend,
    S: Scheduler + ?Sized,
    P: FnMut(&Grid, &FrameReport) -> Result<()>,
{
    let mut frames = 0u64;
    while let Some(timestamp_ms) = scheduler.next_frame()? {
        let report = driver.on_frame(timestamp_ms)?;
        present(driver.grid(), &report)?;
        frames += 1;
    }
    info!(
        "frame loop finished after {} frames (rotation {:.3}s)",
        frames,
        driver.rotation().seconds()
    );
    Ok(frames)
}
