// Simulation loop - synchronous generation advance and the paced render loop

use crate::display::draw_frame;
use crate::grid::{cell_next_state, LifeGrid};
use crate::life_config::DisplayConfig;
use log::{debug, info};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// What happened during one call to [`advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The pattern changed and still has live cells
    Running,
    /// The new generation is identical to the previous one
    FixedPoint,
    /// No live cells remain
    Extinct,
}

impl Advance {
    /// Whether the simulation should keep going
    pub fn is_running(self) -> bool {
        matches!(self, Advance::Running)
    }
}

/// Result of a completed [`run_loop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub final_generation: u64,
    pub frames_drawn: u64,
    pub stop_reason: Advance,
}

/// Move `grid` forward by one generation.
///
/// Every cell is evaluated against a snapshot of the previous generation and
/// the results are written back into `grid`. The generation counter only
/// moves when the pattern changed.
pub fn advance(grid: &mut LifeGrid) -> Advance {
    let previous = grid.clone();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set_cell(x, y, cell_next_state(&previous, x, y));
        }
    }

    if *grid == previous {
        debug!("Generation {} is a fixed point", grid.generation());
        return Advance::FixedPoint;
    }

    grid.increment_generation();

    if grid.is_empty() {
        debug!("Population extinct at generation {}", grid.generation());
        return Advance::Extinct;
    }

    debug!(
        "Generation {}: {} live cells",
        grid.generation(),
        grid.live_count()
    );
    Advance::Running
}

/// Render, pause and advance until the grid stops changing or dies out.
/// The initial state is always drawn before the first advance.
pub fn run_loop<W: Write>(
    grid: &mut LifeGrid,
    frame_delay: Duration,
    sink: &mut W,
) -> io::Result<RunSummary> {
    run_frames(grid, frame_delay, false, sink)
}

/// [`run_loop`] with pacing and screen handling taken from `display`
pub fn run_loop_with_config<W: Write>(
    grid: &mut LifeGrid,
    display: &DisplayConfig,
    sink: &mut W,
) -> io::Result<RunSummary> {
    run_frames(grid, display.frame_delay(), display.clear_each_frame, sink)
}

fn run_frames<W: Write>(
    grid: &mut LifeGrid,
    frame_delay: Duration,
    clear_screen: bool,
    sink: &mut W,
) -> io::Result<RunSummary> {
    info!(
        "Starting {}x{} simulation with {} live cells, {:?} per frame",
        grid.width(),
        grid.height(),
        grid.live_count(),
        frame_delay
    );

    let mut frames_drawn = 0;
    let stop_reason = loop {
        draw_frame(grid, sink, clear_screen)?;
        frames_drawn += 1;

        if !frame_delay.is_zero() {
            thread::sleep(frame_delay);
        }

        let outcome = advance(grid);
        if !outcome.is_running() {
            break outcome;
        }
    };

    info!(
        "Simulation stopped at generation {} ({:?}) after {} frames",
        grid.generation(),
        stop_reason,
        frames_drawn
    );

    Ok(RunSummary {
        final_generation: grid.generation(),
        frames_drawn,
        stop_reason,
    })
}
