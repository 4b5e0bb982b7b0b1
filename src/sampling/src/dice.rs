use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::error::SamplingError;

pub const DEFAULT_SIDES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u32,
}

impl Die {
    pub fn new(sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(SamplingError::InvalidSides(sides));
        }

        Ok(Die { sides })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Uniform value in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.sides)
    }

    pub fn roll_many<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<u32> {
        debug!(sides = self.sides, rolls = n, "rolling die");
        (0..n).map(|_| self.roll(rng)).collect()
    }
}

impl Default for Die {
    fn default() -> Self {
        Die {
            sides: DEFAULT_SIDES,
        }
    }
}
