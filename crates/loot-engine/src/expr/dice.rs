//! Dice expressions (`{3d6}`) and their rolls.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// `count` dice with `sides` faces each, summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// Faces per die. A die with 0 sides always shows 0.
    pub sides: u32,
}

impl DiceExpr {
    /// Create a dice expression.
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Smallest and largest attainable totals.
    pub fn bounds(&self) -> (u64, u64) {
        if self.sides == 0 {
            (0, 0)
        } else {
            let count = u64::from(self.count);
            (count, count * u64::from(self.sides))
        }
    }

    /// Roll every die using the given RNG, keeping each value.
    ///
    /// Dice with 0 or 1 sides show a fixed value without consuming
    /// randomness.
    pub fn roll(&self, rng: &mut StdRng) -> DiceRoll {
        let values = (0..self.count).map(|_| self.face(rng)).collect();
        DiceRoll { values }
    }

    /// Roll every die and return only the sum.
    ///
    /// Consumes randomness exactly as [`DiceExpr::roll`] does, without
    /// allocating per die.
    pub fn total(&self, rng: &mut StdRng) -> u64 {
        match self.sides {
            0 | 1 => self.bounds().0,
            _ => (0..self.count).fold(0, |sum, _| sum + u64::from(self.face(rng))),
        }
    }

    fn face(&self, rng: &mut StdRng) -> u32 {
        match self.sides {
            0 => 0,
            1 => 1,
            sides => rng.random_range(1..=sides),
        }
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// The individual die values of one roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Die values in roll order.
    pub values: Vec<u32>,
}

impl DiceRoll {
    /// Sum of all die values.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let roll = DiceExpr::new(10, 6).roll(&mut rng);
        assert_eq!(roll.count(), 10);
        for v in &roll.values {
            assert!((1..=6).contains(v));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let dice = DiceExpr::new(3, 20);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(dice.roll(&mut rng1), dice.roll(&mut rng2));
    }

    #[test]
    fn zero_count_sums_to_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let roll = DiceExpr::new(0, 6).roll(&mut rng);
        assert_eq!(roll.count(), 0);
        assert_eq!(roll.total(), 0);
    }

    #[test]
    fn zero_sides_show_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let roll = DiceExpr::new(4, 0).roll(&mut rng);
        assert_eq!(roll.values, [0, 0, 0, 0]);
        assert_eq!(DiceExpr::new(4, 0).bounds(), (0, 0));
    }

    #[test]
    fn total_matches_roll() {
        let dice = DiceExpr::new(12, 8);
        let mut rng1 = StdRng::seed_from_u64(21);
        let mut rng2 = StdRng::seed_from_u64(21);
        assert_eq!(dice.total(&mut rng1), dice.roll(&mut rng2).total());
    }

    #[test]
    fn total_of_huge_fixed_dice_does_not_allocate() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(DiceExpr::new(4_000_000_000, 0).total(&mut rng), 0);
        assert_eq!(
            DiceExpr::new(4_000_000_000, 1).total(&mut rng),
            4_000_000_000
        );
    }

    #[test]
    fn one_sided_dice_show_one() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(DiceExpr::new(3, 1).roll(&mut rng).values, [1, 1, 1]);
    }

    #[test]
    fn bounds() {
        assert_eq!(DiceExpr::new(3, 6).bounds(), (3, 18));
        assert_eq!(DiceExpr::new(1, 1).bounds(), (1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(DiceExpr::new(3, 6).to_string(), "3d6");
        let roll = DiceRoll {
            values: vec![3, 5],
        };
        assert_eq!(roll.to_string(), "[3, 5] = 8");
    }
}
