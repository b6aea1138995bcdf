// Grid dimensions as given on the command line
use crate::grid::{GridError, GridResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Both dimensions must be positive before a grid is built
    pub fn validate(&self) -> GridResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
