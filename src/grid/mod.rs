// Grid module - the Life board and the rule that evolves it

pub mod life;
pub mod rules;
pub mod traits;

// Re-export the main grid types for easy access
pub use life::{CellState, LifeGrid, DEFAULT_DENSITY};
pub use rules::{cell_next_state, count_live_neighbours, MAX_SURVIVAL, MIN_SURVIVAL, SPAWN};
pub use traits::{CellDisplay, GridError, GridResult};
