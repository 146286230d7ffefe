//! World configuration.

use crate::{
    error::Error,
    generations::Generations,
    grid::{check_probability, check_size, Grid},
};
use educe::Educe;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The initial grid will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 200)]
    pub width: usize,

    /// Height.
    #[educe(Default = 100)]
    pub height: usize,

    /// The probability that a cell in the initial grid is alive.
    #[educe(Default = 0.2)]
    pub alive_probability: f64,

    /// Seed of the random number generator.
    ///
    /// `None` means that the seed is taken from the system.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the probability that a cell in the initial grid is alive.
    pub fn set_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Checks that the size is positive and the probability is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        check_size(self.width, self.height)?;
        check_probability(self.alive_probability)
    }

    /// Creates a random grid from the configuration.
    ///
    /// With a [`seed`](#structfield.seed), the same configuration
    /// always gives the same grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        match self.seed {
            Some(seed) => self.grid_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.grid_with_rng(&mut rand::thread_rng()),
        }
    }

    /// Creates a random grid from the configuration, with the given random number generator.
    ///
    /// The [`seed`](#structfield.seed) is ignored.
    pub fn grid_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, Error> {
        Grid::random(self.width, self.height, self.alive_probability, rng)
    }

    /// Creates a random grid and iterates over its generations.
    pub fn generations(&self) -> Result<Generations, Error> {
        self.grid().map(Generations::new)
    }
}
