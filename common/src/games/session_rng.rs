use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snake::{CellPicker, FieldSize, Position};

/// Seeded RNG owned by one game session. Replaying the same seed with the
/// same inputs reproduces the same apples and bricks.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl CellPicker for SessionRng {
    fn pick_cell(&mut self, field_size: FieldSize) -> Position {
        Position::new(
            self.rng.random_range(0..field_size.width),
            self.rng.random_range(0..field_size.height),
        )
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
