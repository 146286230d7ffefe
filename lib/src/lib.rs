//! Conway's Game of Life on a torus.
//!
//! A [`Grid`] is a rectangle of living and dead cells whose edges are
//! glued to the opposite edges. [`step`] computes the next generation,
//! and [`generations`] iterates over all of them:
//!
//! ```
//! use rlife_lib::{generations, Grid};
//!
//! let blinker = Grid::with_alive(5, 5, vec![(1, 2), (2, 2), (3, 2)])?;
//! let mut gens = generations(blinker.clone());
//! assert_eq!(gens.next(), Some(blinker.clone()));
//! assert_eq!(gens.nth(1), Some(blinker));
//! # Ok::<(), rlife_lib::Error>(())
//! ```

mod config;
mod error;
mod generations;
mod grid;
mod neighbors;
mod rule;

pub use config::Config;
pub use error::Error;
pub use generations::{generations, Generations};
pub use grid::{Coord, Grid};
pub use neighbors::{count_neighbors, NeighborCounts};
pub use rule::{next_state, step};
