// Life Grid - fixed-size board of alive/dead cells plus a generation counter

use crate::display::formatters::format_status_line;
use crate::grid::traits::{CellDisplay, GridError, GridResult};
use rand::Rng;
use std::io::{self, Write};

/// Probability of a cell starting alive when randomized without an explicit density
pub const DEFAULT_DENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl CellDisplay for CellState {
    fn display_char(&self) -> char {
        match self {
            CellState::Alive => 'o',
            CellState::Dead => ' ',
        }
    }

    fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// A Game of Life board. Cells are stored row-major, `cells[y][x]`.
///
/// Equality compares dimensions and the alive pattern only; the generation
/// counter is ignored so that a freshly advanced grid can be compared against
/// the snapshot it was computed from.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
    generation: u64,
}

impl LifeGrid {
    /// Create a grid with every cell dead at generation 0
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![vec![CellState::Dead; width]; height],
            generation: 0,
        })
    }

    /// Build a grid from text rows. `o` or `#` marks a live cell, a space or
    /// `.` a dead one. Every row must have the same length.
    pub fn from_rows(rows: &[&str]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut grid = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::InvalidPattern(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }

            for (x, ch) in row.chars().enumerate() {
                grid.cells[y][x] = match ch {
                    'o' | '#' => CellState::Alive,
                    ' ' | '.' => CellState::Dead,
                    other => {
                        return Err(GridError::InvalidPattern(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, x, y
                        )))
                    }
                };
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Randomize every cell with even odds
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_random(rng, DEFAULT_DENSITY);
    }

    /// Randomize every cell, each alive with probability `density`.
    /// The grid is left untouched when `density` is NaN or outside `[0, 1]`.
    pub fn randomize_with_density<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
    ) -> GridResult<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        self.fill_random(rng, density);
        Ok(())
    }

    fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = CellState::from_alive(rng.gen_bool(density));
            }
        }
    }

    /// Coordinates are signed so neighbour offsets of -1 stay out of range
    /// instead of wrapping around.
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        let x_in_bounds = x >= 0 && (x as usize) < self.width;
        let y_in_bounds = y >= 0 && (y as usize) < self.height;

        x_in_bounds && y_in_bounds
    }

    /// Validate coordinates against grid bounds
    pub fn validate_coordinates(&self, x: isize, y: isize) -> GridResult<()> {
        if !self.is_in_bounds(x, y) {
            return Err(GridError::InvalidCoordinates {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn get(&self, x: isize, y: isize) -> Option<CellState> {
        if self.is_in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.get(x, y).map_or(false, |cell| cell.is_alive())
    }

    pub fn set(&mut self, x: isize, y: isize, state: CellState) -> GridResult<()> {
        self.validate_coordinates(x, y)?;
        self.cells[y as usize][x as usize] = state;
        Ok(())
    }

    /// Caller guarantees `x < width` and `y < height`
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[y][x] = state;
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        !self
            .cells
            .iter()
            .flat_map(|row| row.iter())
            .any(|cell| cell.is_alive())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Write the board followed by a blank line and the status line.
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.display_char()).collect();
            writeln!(sink, "{}", line)?;
        }

        writeln!(sink)?;
        writeln!(
            sink,
            "{}",
            format_status_line(self.width, self.height, self.generation)
        )
    }
}

impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for LifeGrid {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = LifeGrid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.generation(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            LifeGrid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(LifeGrid::new(5, 0).is_err());
    }

    #[test]
    fn test_bounds() {
        let grid = LifeGrid::new(5, 4).unwrap();
        assert!(!grid.is_in_bounds(-1, 0));
        assert!(!grid.is_in_bounds(0, -1));
        assert!(!grid.is_in_bounds(5, 0));
        assert!(!grid.is_in_bounds(0, 4));
        assert!(grid.is_in_bounds(0, 0));
        assert!(grid.is_in_bounds(4, 3));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = LifeGrid::new(2, 2).unwrap();
        let err = grid.set(2, 0, CellState::Alive).unwrap_err();
        assert!(matches!(err, GridError::InvalidCoordinates { x: 2, y: 0, .. }));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        grid.set(1, 1, CellState::Alive).unwrap();

        let mut copy = grid.clone();
        assert_eq!(copy, grid);

        copy.set(0, 0, CellState::Alive).unwrap();
        assert_ne!(copy, grid);
        assert_eq!(grid.get(0, 0), Some(CellState::Dead));
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_equality_ignores_generation() {
        let grid = LifeGrid::from_rows(&[" o ", " o "]).unwrap();
        let mut later = grid.clone();
        later.increment_generation();
        assert_eq!(grid, later);
    }

    #[test]
    fn test_equality_checks_dimensions() {
        let wide = LifeGrid::new(4, 2).unwrap();
        let tall = LifeGrid::new(2, 4).unwrap();
        assert_ne!(wide, tall);
    }

    #[test]
    fn test_from_rows() {
        let grid = LifeGrid::from_rows(&["o.", ".#"]).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(1, 0));
        assert!(grid.is_alive(1, 1));
        assert_eq!(grid.live_count(), 2);

        assert!(matches!(
            LifeGrid::from_rows(&["oo", "o"]),
            Err(GridError::InvalidPattern(_))
        ));
        assert!(matches!(
            LifeGrid::from_rows(&["ox"]),
            Err(GridError::InvalidPattern(_))
        ));
        assert!(LifeGrid::from_rows(&[]).is_err());
    }

    #[test]
    fn test_randomize_is_deterministic_for_seed() {
        let mut a = LifeGrid::new(16, 16).unwrap();
        let mut b = LifeGrid::new(16, 16).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(7));
        b.randomize(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.live_count() < 16 * 16);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut grid = LifeGrid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize_with_density(&mut rng, 1.0).unwrap();
        assert_eq!(grid.live_count(), 64);
        grid.randomize_with_density(&mut rng, 0.0).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_randomize_rejects_bad_density() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let err = grid.randomize_with_density(&mut rng, f64::NAN).unwrap_err();
        assert!(matches!(err, GridError::InvalidDensity(d) if d.is_nan()));

        for bad in [-0.1, 1.5, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                grid.randomize_with_density(&mut rng, bad),
                Err(GridError::InvalidDensity(bad))
            );
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_render_format() {
        let grid = LifeGrid::from_rows(&["o o", " o "]).unwrap();
        let mut out = Vec::new();
        grid.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "o o\n o \n\nwidth: 3, height: 2, iteration: 0\n"
        );
    }
}
