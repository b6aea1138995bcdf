use crate::grid::GridError;
use std::fmt;

/// Top-level error type for the e_life binary and library entry points
#[derive(Debug)]
pub enum LifeError {
    /// Command line could not be understood
    Usage(String),
    /// Grid construction or access failed
    Grid(GridError),
    /// Configuration errors
    Config(String),
    /// Terminal or file I/O failed
    Io(std::io::Error),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::Usage(msg) => write!(f, "Invalid arguments: {}", msg),
            LifeError::Grid(err) => write!(f, "Grid error: {}", err),
            LifeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LifeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Grid(err) => Some(err),
            LifeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for LifeError {
    fn from(err: GridError) -> Self {
        LifeError::Grid(err)
    }
}

impl From<std::io::Error> for LifeError {
    fn from(err: std::io::Error) -> Self {
        LifeError::Io(err)
    }
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Config(err.to_string())
    }
}

/// Result type alias for e_life operations
pub type LifeResult<T> = Result<T, LifeError>;
