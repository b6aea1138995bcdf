// E-Life: Conway's Game of Life on a fixed-size terminal grid
// The board evolves until it reaches a fixed point or dies out

// Modular structure
pub mod cli;
pub mod config;
pub mod display;
pub mod grid;
pub mod random;
pub mod simulation;

pub mod life_config;
pub mod life_errors;

// Re-export main types for convenience
pub use config::GridConfig;
pub use grid::{CellDisplay, CellState, GridError, GridResult, LifeGrid};
pub use life_config::{DisplayConfig, LifeConfig, SimulationConfig};
pub use life_errors::{LifeError, LifeResult};
pub use simulation::{advance, run_loop, run_loop_with_config, Advance, RunSummary};

/// Build a grid from validated dimensions and fill it from the process RNG
pub fn random_grid(grid: &GridConfig, simulation: &SimulationConfig) -> LifeResult<LifeGrid> {
    grid.validate()?;
    let mut life = LifeGrid::new(grid.width, grid.height)?;
    random::with_process_rng(|rng| life.randomize_with_density(rng, simulation.density))?;
    Ok(life)
}
