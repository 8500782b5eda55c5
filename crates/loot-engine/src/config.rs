//! Configuration for a draw.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Largest number of results a single draw may request.
pub const MAX_COUNT: u32 = 10_000;

/// Configuration for a draw.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Count used when the count input is blank (1 to [`MAX_COUNT`]).
    pub default_count: u32,
    /// Minimum zero-padded width of result indices (at least 1).
    pub index_width: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_count: 1,
            index_width: 2,
        }
    }
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the count used for blank input (clamped to 1..=[`MAX_COUNT`]).
    pub fn with_default_count(mut self, count: u32) -> Self {
        self.default_count = count.clamp(1, MAX_COUNT);
        self
    }

    /// Set the minimum index width (clamped to at least 1).
    pub fn with_index_width(mut self, width: usize) -> Self {
        self.index_width = width.max(1);
        self
    }

    /// Build the random source for a draw.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = DrawConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.default_count, 1);
        assert_eq!(cfg.index_width, 2);
    }

    #[test]
    fn builder_methods() {
        let cfg = DrawConfig::default()
            .with_seed(7)
            .with_default_count(3)
            .with_index_width(4);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.default_count, 3);
        assert_eq!(cfg.index_width, 4);
    }

    #[test]
    fn values_clamped() {
        let cfg = DrawConfig::default()
            .with_default_count(0)
            .with_index_width(0);
        assert_eq!(cfg.default_count, 1);
        assert_eq!(cfg.index_width, 1);
        let cfg = DrawConfig::default().with_default_count(u32::MAX);
        assert_eq!(cfg.default_count, MAX_COUNT);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = DrawConfig::default().with_seed(99);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
