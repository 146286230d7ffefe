//! All kinds of errors in this crate.

use crate::grid::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositiveError,
    /// A {0}x{1} grid has too many cells.
    SizeError(usize, usize),
    /// Probability should be between 0 and 1, got {0}.
    ProbabilityError(f64),
    /// Expected {expected} cells, found {found}.
    CellCountError { expected: usize, found: usize },
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
}
