//! Counting living neighbors on a torus.

use crate::grid::{Coord, Grid};

/// Offsets of the eight cells in the neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of living neighbors of every cell in a grid.
///
/// It has the same size as the grid it is computed from,
/// and each count is between `0` and `8`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the count at some cell. Returns `None` if there is no such cell.
    pub fn get(&self, (x, y): Coord) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.counts[y * self.width + x])
        } else {
            None
        }
    }

    /// All the counts, row by row.
    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    /// Recomputes the counts for `grid`, reusing the allocation.
    ///
    /// The cell at `(x, y)` gets one from every offset `(dx, dy)` in [`NBHD`]
    /// such that the cell at `((x + dx) mod width, (y + dy) mod height)` is alive.
    /// Each offset is one pass over the grid, adding a rotated copy of every row.
    pub(crate) fn recount(&mut self, grid: &Grid) {
        let (width, height) = (grid.width, grid.height);
        self.width = width;
        self.height = height;
        self.counts.clear();
        self.counts.resize(width * height, 0);

        for &(dx, dy) in NBHD.iter() {
            let shift_x = wrap(dx, width);
            let shift_y = wrap(dy, height);
            for (y, acc) in self.counts.chunks_exact_mut(width).enumerate() {
                let src_y = (y + shift_y) % height;
                let src = &grid.cells[src_y * width..(src_y + 1) * width];
                add_rotated(acc, src, shift_x);
            }
        }
    }
}

/// `d mod n`, in `0..n`.
#[inline]
fn wrap(d: isize, n: usize) -> usize {
    d.rem_euclid(n as isize) as usize
}

/// Adds `src` rotated left by `shift` to `acc`,
/// i.e. `acc[x] += src[(x + shift) mod len]`.
#[inline]
fn add_rotated(acc: &mut [u8], src: &[bool], shift: usize) {
    let (head, tail) = acc.split_at_mut(acc.len() - shift);
    add_row(head, &src[shift..]);
    add_row(tail, &src[..shift]);
}

#[inline]
fn add_row(acc: &mut [u8], src: &[bool]) {
    for (count, &alive) in acc.iter_mut().zip(src) {
        *count += u8::from(alive);
    }
}

/// Counts the living neighbors of every cell in the grid.
///
/// The grid is a torus: the neighbors of a cell on an edge
/// include cells on the opposite edge.
pub fn count_neighbors(grid: &Grid) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    counts.recount(grid);
    counts
}

impl Grid {
    /// Counts the living neighbors of every cell. See [`count_neighbors`].
    pub fn neighbor_counts(&self) -> NeighborCounts {
        count_neighbors(self)
    }
}
