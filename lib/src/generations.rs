//! The infinite sequence of generations.

use crate::{grid::Grid, neighbors::NeighborCounts};
use std::{iter::FusedIterator, mem};

/// An iterator over the generations of a grid.
///
/// The first item is the initial grid itself, and each following item is
/// the [`step`](Grid::step) of the previous one. It never ends.
///
/// The next generation is only computed when it is asked for,
/// so the iterator can be consumed at any pace.
/// To replay from some generation, save that grid and call [`generations`]
/// again.
#[derive(Clone, Debug)]
pub struct Generations {
    /// The latest generation.
    current: Grid,

    /// A buffer for the next generation.
    spare: Grid,

    /// A buffer for the neighbor counts.
    counts: NeighborCounts,

    /// The index of `current`.
    generation: u64,

    /// Whether `current` has been yielded.
    started: bool,
}

impl Generations {
    /// Starts from the initial grid.
    pub fn new(initial: Grid) -> Self {
        Generations {
            spare: initial.buffer(),
            current: initial,
            counts: NeighborCounts::default(),
            generation: 0,
            started: false,
        }
    }

    /// The last yielded grid, or the initial grid if nothing has been yielded.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The index of [`current`](Self::current), counting the initial grid as `0`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stops iterating and returns [`current`](Self::current).
    pub fn into_grid(self) -> Grid {
        self.current
    }

    fn advance(&mut self) {
        self.current.step_into(&mut self.spare, &mut self.counts);
        mem::swap(&mut self.current, &mut self.spare);
        self.generation += 1;
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generations {}

/// The generations of a grid, starting from the grid itself.
pub fn generations(initial: Grid) -> Generations {
    Generations::new(initial)
}
