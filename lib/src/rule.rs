//! Conway's rule, `B3/S23`.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{grid::Grid, neighbors::NeighborCounts};

/// The state of a cell in the next generation,
/// given its current state and the number of its living neighbors.
///
/// A cell with exactly 3 living neighbors is alive in the next generation.
/// A cell with exactly 2 living neighbors keeps its state.
/// All other cells die.
#[inline]
pub fn next_state(alive: bool, count: u8) -> bool {
    count == 3 || (alive && count == 2)
}

impl Grid {
    /// Computes the next generation.
    pub fn step(&self) -> Grid {
        let mut next = self.buffer();
        let mut counts = NeighborCounts::default();
        self.step_into(&mut next, &mut counts);
        next
    }

    /// Computes the next generation into `next`,
    /// using `counts` as the buffer for neighbor counts.
    ///
    /// Both buffers are resized to the size of `self` if needed,
    /// so they can be reused across generations without new allocations.
    pub fn step_into(&self, next: &mut Grid, counts: &mut NeighborCounts) {
        counts.recount(self);
        next.width = self.width;
        next.height = self.height;
        next.cells.clear();
        next.cells.extend(
            self.cells
                .iter()
                .zip(counts.as_slice())
                .map(|(&alive, &count)| next_state(alive, count)),
        );
    }
}

/// Computes the next generation of a grid. See [`Grid::step`].
pub fn step(grid: &Grid) -> Grid {
    grid.step()
}
