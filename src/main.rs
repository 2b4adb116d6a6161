//! Terminal cube grid runner (default binary).
//!
//! Builds the cube, uploads it to the software rasterizer and then runs the
//! frame loop at a fixed cadence, flushing the grid to the terminal after
//! every frame. Press `q`, `Esc` or `Ctrl-C` to leave.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use log::{error, info};

use cube_grid::core::build_cube;
use cube_grid::engine::{
    run, AnimationDriver, IntervalScheduler, SessionConfig, SoftwareRasterizer, StopHandle,
};
use cube_grid::input::{control_for_event, ControlSignal};
use cube_grid::term::{FrameBuffer, GridView, TerminalRenderer};
use cube_grid::types::{GRID_HEIGHT, GRID_WIDTH};

fn main() -> Result<()> {
    // Frame timestamps count from here, so frame 0 sees the startup time.
    let origin = Instant::now();
    let config = SessionConfig::from_env();
    init_logging(&config)?;
    info!("starting cube grid with {:?}", config);

    // Startup failures abort before the terminal is touched.
    let mut driver = start(&config).map_err(|e| {
        error!("startup failed: {:#}", e);
        e
    })?;

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .context("terminal is not available")
        .and_then(|()| run_session(&mut term, &mut driver, &config, origin));

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(frames) => {
            info!("session ended after {} frames", frames);
            Ok(())
        }
        Err(e) => {
            error!("session aborted: {:#}", e);
            Err(e)
        }
    }
}

fn init_logging(config: &SessionConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    );

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}

fn start(config: &SessionConfig) -> Result<AnimationDriver<SoftwareRasterizer>> {
    let backend = SoftwareRasterizer::new(GRID_WIDTH, GRID_HEIGHT)?;
    let driver = AnimationDriver::new(backend, build_cube(), config.row_order)?;
    Ok(driver)
}

/// Wait up to `timeout` for terminal events and turn quit keys into a stop request.
fn pump_events(stop: &StopHandle, timeout: Duration) -> Result<()> {
    if event::poll(timeout)? {
        if let Some(ControlSignal::Stop) = control_for_event(&event::read()?) {
            stop.request_stop();
        }
    }
    Ok(())
}

fn run_session(
    term: &mut TerminalRenderer,
    driver: &mut AnimationDriver<SoftwareRasterizer>,
    config: &SessionConfig,
    origin: Instant,
) -> Result<u64> {
    let view = GridView::default();
    let (w, h) = view.framebuffer_size(driver.grid());
    let mut fb = FrameBuffer::new(w, h);

    let stop = StopHandle::new();
    let waiter_stop = stop.clone();
    let mut scheduler = IntervalScheduler::new(
        origin,
        config.frame_interval,
        stop.clone(),
        config.max_frames,
        move |timeout| pump_events(&waiter_stop, timeout),
    );

    run(driver, &mut scheduler, |grid, _report| {
        view.render_into(grid, &mut fb);
        term.draw_swap(&mut fb)?;
        // Catch quit keys even when frames run late and the scheduler never waits.
        pump_events(&stop, Duration::ZERO)
    })
}
