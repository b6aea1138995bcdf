// Classic B3/S23 cell rule

use crate::grid::life::{CellState, LifeGrid};

/// A live cell needs strictly more neighbours than this to survive
pub const MIN_SURVIVAL: usize = 1;
/// A live cell needs strictly fewer neighbours than this to survive
pub const MAX_SURVIVAL: usize = 4;
/// A dead cell with exactly this many neighbours comes alive
pub const SPAWN: usize = 3;

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live cells among the in-bounds neighbours of `(x, y)`.
/// The edges do not wrap.
pub fn count_live_neighbours(grid: &LifeGrid, x: usize, y: usize) -> usize {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOUR_OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.is_alive(x + dx, y + dy))
        .count()
}

/// Next state of the cell at `(x, y)`, evaluated against `grid`.
pub fn cell_next_state(grid: &LifeGrid, x: usize, y: usize) -> CellState {
    let alive_neighbours = count_live_neighbours(grid, x, y);
    let alive = grid.is_alive(x as isize, y as isize);

    let next_alive = if alive {
        MIN_SURVIVAL < alive_neighbours && alive_neighbours < MAX_SURVIVAL
    } else {
        alive_neighbours == SPAWN
    };

    CellState::from_alive(next_alive)
}
