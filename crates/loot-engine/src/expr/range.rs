//! Range expressions (`{1-10}`).

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A uniform integer draw over `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeExpr {
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound, never below `min`.
    pub max: u32,
}

impl RangeExpr {
    /// Create a range, swapping the bounds if they are written backwards.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Draw one value.
    pub fn roll(&self, rng: &mut StdRng) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

impl std::fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
