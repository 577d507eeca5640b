//! Injected sources of die values.
//!
//! Nothing in this crate reaches for ambient randomness. Callers hand the
//! evaluator a [`DiceSource`]: a seeded [`StdRng`] for play, or [`FixedDice`]
//! to replay a known sequence.

use rand::Rng;
use rand::rngs::StdRng;

/// Produces uniformly distributed die values.
pub trait DiceSource {
    /// Roll one die, returning a value in `1..=sides`. `sides` is never zero.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl DiceSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

/// A fixed, cycling sequence of die values.
///
/// Values are folded into `1..=sides` so a sequence written for d6s stays
/// valid when reused for a d3 roll.
#[derive(Debug, Clone, Default)]
pub struct FixedDice {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedDice {
    /// Create a source that yields `values` in order, then starts over.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for FixedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        (raw.max(1) - 1) % sides + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn fixed_yields_in_order_and_cycles() {
        let mut dice = FixedDice::new([6, 5, 3]);
        let rolled: Vec<u32> = (0..5).map(|_| dice.roll_die(6)).collect();
        assert_eq!(rolled, vec![6, 5, 3, 6, 5]);
        assert_eq!(dice.drawn(), 5);
    }

    #[test]
    fn fixed_folds_into_die_range() {
        let mut dice = FixedDice::new([6, 4, 0]);
        assert_eq!(dice.roll_die(3), 3);
        assert_eq!(dice.roll_die(3), 1);
        assert_eq!(dice.roll_die(3), 1);
    }

    #[test]
    fn empty_fixed_rolls_ones() {
        let mut dice = FixedDice::default();
        assert_eq!(dice.roll_die(6), 1);
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let v = rng.roll_die(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(a.roll_die(6), b.roll_die(6));
        }
    }
}
