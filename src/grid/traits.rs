// Common types shared by the grid and its renderers

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height was zero
    InvalidDimensions { width: usize, height: usize },
    InvalidCoordinates {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    /// A text pattern could not be turned into a grid
    InvalidPattern(String),
    /// Live-cell probability was NaN or outside `[0, 1]`
    InvalidDensity(f64),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid grid dimensions {}x{} - width and height must be positive",
                    width, height
                )
            }
            GridError::InvalidCoordinates {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}) - grid size is {}x{}",
                    x, y, width, height
                )
            }
            GridError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            GridError::InvalidDensity(density) => {
                write!(f, "Invalid density {} - must be between 0 and 1", density)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Trait for displaying grid cells
pub trait CellDisplay {
    /// Get the character drawn for this cell
    fn display_char(&self) -> char;

    /// Check if this cell counts towards the population
    fn is_alive(&self) -> bool;
}
