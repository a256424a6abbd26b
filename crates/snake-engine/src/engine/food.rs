use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{board::Board, position::Position};

/// Seed for deterministic food placement.
///
/// A 128-bit value rendered as 32 hexadecimal digits, big-endian. The same
/// seed on the same board yields the same sequence of food positions, which
/// makes games reproducible from the command line and in tests.
///
/// # Example
///
/// ```
/// use snake_engine::{Board, FoodSeed, FoodSpawner};
///
/// let seed: FoodSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = FoodSpawner::with_seed(seed);
/// let mut b = FoodSpawner::with_seed(seed);
/// assert_eq!(a.spawn(&Board::DEFAULT), b.spawn(&Board::DEFAULT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: {reason}")]
pub struct FoodSeedParseError {
    input: String,
    reason: String,
}

impl FoodSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for FoodSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for FoodSeed {
    type Err = FoodSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason: String| FoodSeedParseError {
            input: s.to_owned(),
            reason,
        };
        if s.len() != 32 {
            return Err(error(format!("expected 32 characters, got {}", s.len())));
        }
        // `from_str_radix` tolerates a leading sign, which is not a hex digit here.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error("non-hex character".to_owned()));
        }
        let num = u128::from_str_radix(s, 16).map_err(|e| error(e.to_string()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for FoodSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FoodSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `FoodSeed` values with `rng.random()`.
impl Distribution<FoodSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FoodSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        FoodSeed(seed)
    }
}

/// Picks food cells uniformly over the board.
///
/// Placement ignores the snake: food may land on a cell the body currently
/// occupies.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    seed: FoodSeed,
    rng: Pcg32,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodSpawner {
    /// Creates a spawner with a random seed.
    ///
    /// For reproducible placement, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: FoodSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this spawner was created from.
    #[must_use]
    pub fn seed(&self) -> FoodSeed {
        self.seed
    }

    /// Draws a grid-aligned position inside `board`.
    pub fn spawn(&mut self, board: &Board) -> Position {
        let column = self.rng.random_range(0..board.columns());
        let row = self.rng.random_range(0..board.rows());
        board.cell_position(column, row)
    }

    /// Restarts placement from a fresh seed drawn from the current stream.
    ///
    /// The run of seeds stays reproducible from the first one, and
    /// [`Self::seed`] always replays placement since the last reseed.
    pub fn reseed(&mut self) {
        *self = Self::with_seed(self.rng.random());
    }
}
