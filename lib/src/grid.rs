//! The grid of cells.

use crate::error::Error;
use rand::Rng;
use std::fmt::{self, Debug, Display, Formatter};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed.
pub type Coord = (usize, usize);

/// A rectangular grid of cells, wrapped around into a torus.
///
/// Each cell is either alive (`true`) or dead (`false`).
/// The size of a grid never changes after its creation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width.
    pub(crate) width: usize,

    /// Height.
    pub(crate) height: usize,

    /// States of all the cells, row by row.
    ///
    /// The cell at `(x, y)` is stored at `y * width + x`.
    pub(crate) cells: Vec<bool>,
}

/// Checks the size and returns the number of cells.
pub(crate) fn check_size(width: usize, height: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 {
        return Err(Error::NonPositiveError);
    }
    width
        .checked_mul(height)
        .ok_or(Error::SizeError(width, height))
}

pub(crate) fn check_probability(probability: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(Error::ProbabilityError(probability))
    }
}

impl Grid {
    /// Creates a grid where all cells are dead.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        let len = check_size(width, height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Creates a grid from the states of its cells, given row by row.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, Error> {
        let len = check_size(width, height)?;
        if cells.len() != len {
            return Err(Error::CellCountError {
                expected: len,
                found: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Creates a grid whose cell at `(x, y)` is alive iff `f((x, y))` returns `true`.
    pub fn from_fn<F: FnMut(Coord) -> bool>(
        width: usize,
        height: usize,
        mut f: F,
    ) -> Result<Self, Error> {
        check_size(width, height)?;
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(&mut f)
            .collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Creates a grid where exactly the cells at the given coordinates are alive.
    ///
    /// Returns an error if any of the coordinates is outside the grid.
    pub fn with_alive<I: IntoIterator<Item = Coord>>(
        width: usize,
        height: usize,
        alive: I,
    ) -> Result<Self, Error> {
        let mut grid = Grid::new(width, height)?;
        for coord in alive {
            let index = grid.index(coord).ok_or(Error::SetCellError(coord))?;
            grid.cells[index] = true;
        }
        Ok(grid)
    }

    /// Creates a random grid.
    ///
    /// Each cell is independently alive with probability `alive_probability`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let len = check_size(width, height)?;
        check_probability(alive_probability)?;
        let cells = (0..len)
            .map(|_| rng.gen_bool(alive_probability))
            .collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// An empty buffer of the same size, to be filled by [`step_into`](Self::step_into).
    pub(crate) fn buffer(&self) -> Self {
        Grid {
            width: self.width,
            height: self.height,
            cells: Vec::with_capacity(self.cells.len()),
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, (x, y): Coord) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Whether the cell is alive. Cells outside the grid are dead.
    #[inline]
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// States of all the cells, row by row.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over all the cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| ((i % width, i / width), alive))
    }

    /// Iterates over the coordinates of living cells.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|&(_, alive)| alive)
            .map(|(coord, _)| coord)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether all cells are dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "o" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({}x{})", self.width, self.height)?;
        Display::fmt(self, f)
    }
}
