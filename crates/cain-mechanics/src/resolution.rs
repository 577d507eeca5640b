//! Pool evaluation.
//!
//! Rolls a [`DicePool`] against an injected [`DiceSource`] and counts
//! successes. An empty pool is never rolled as zero dice; the call site's
//! [`Fallback`] is rolled in its place with the same threshold.

use serde::{Deserialize, Serialize};

use crate::dice::pool::suffix;
use crate::dice::{DicePool, DiceSource, RollOutcome};
use crate::error::{MechError, MechResult};

/// The pool substituted when a computed pool has zero dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// Roll `dice`, keep only the lowest; at most one success.
    KeepLowest {
        /// Dice rolled before dropping all but the lowest.
        dice: u32,
    },
    /// Roll `dice` and count every success.
    CountAll {
        /// Dice rolled.
        dice: u32,
    },
}

impl Default for Fallback {
    fn default() -> Self {
        Self::KeepLowest { dice: 2 }
    }
}

impl Fallback {
    /// Number of dice this fallback rolls.
    pub fn dice(self) -> u32 {
        match self {
            Self::KeepLowest { dice } | Self::CountAll { dice } => dice,
        }
    }

    /// Render the fallback for `pool` in dice notation, e.g. `2d6cs>=4kl`.
    pub fn formula(self, pool: &DicePool) -> String {
        let keep = match self {
            Self::KeepLowest { .. } => "kl",
            Self::CountAll { .. } => "",
        };
        format!(
            "{}d{}{}{keep}",
            self.dice(),
            pool.sides,
            suffix(pool.comparison, pool.success_threshold)
        )
    }
}

/// Evaluate `pool` using the default two-dice keep-lowest fallback.
pub fn evaluate<S>(pool: &DicePool, source: &mut S) -> MechResult<RollOutcome>
where
    S: DiceSource + ?Sized,
{
    evaluate_with(pool, Fallback::default(), source)
}

/// Evaluate `pool`, rolling `fallback` instead if the pool is empty.
///
/// Fails with [`MechError::InvalidPool`] before rolling anything if the pool
/// has no sides, a threshold that is not a face of the die, or the fallback
/// itself rolls no dice.
pub fn evaluate_with<S>(
    pool: &DicePool,
    fallback: Fallback,
    source: &mut S,
) -> MechResult<RollOutcome>
where
    S: DiceSource + ?Sized,
{
    pool.validate()?;

    if !pool.is_empty() {
        let results = roll_dice(pool.die_count, pool.sides, source);
        return Ok(RollOutcome::from_results(*pool, results));
    }

    if fallback.dice() == 0 {
        return Err(MechError::InvalidPool("fallback pool rolls no dice".into()));
    }

    let results = roll_dice(fallback.dice(), pool.sides, source);
    Ok(match fallback {
        Fallback::KeepLowest { .. } => RollOutcome::kept_lowest(*pool, results, fallback),
        Fallback::CountAll { .. } => RollOutcome::counted_fallback(*pool, results, fallback),
    })
}

fn roll_dice<S>(count: u32, sides: u32, source: &mut S) -> Vec<u32>
where
    S: DiceSource + ?Sized,
{
    (0..count).map(|_| source.roll_die(sides)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FixedDice, build_pool};

    #[test]
    fn counts_successes_in_a_normal_pool() {
        let pool = build_pool(4, &[1, 0], false);
        let mut dice = FixedDice::new([6, 5, 3, 2, 1]);
        let outcome = evaluate(&pool, &mut dice).unwrap();
        assert_eq!(outcome.results(), &[6, 5, 3, 2, 1]);
        assert_eq!(outcome.success_count(), 2);
        assert_eq!(outcome.fallback(), None);
    }

    #[test]
    fn hard_pool_only_counts_sixes() {
        let pool = build_pool(3, &[], true);
        let mut dice = FixedDice::new([6, 5, 4]);
        let outcome = evaluate(&pool, &mut dice).unwrap();
        assert_eq!(outcome.success_count(), 1);
    }

    #[test]
    fn empty_pool_keeps_lowest_of_two() {
        let pool = build_pool(0, &[], false);
        let mut dice = FixedDice::new([6, 3]);
        let outcome = evaluate(&pool, &mut dice).unwrap();
        assert_eq!(outcome.results(), &[6, 3]);
        assert_eq!(outcome.kept(), Some(3));
        assert_eq!(outcome.success_count(), 0);
        assert_eq!(outcome.fallback(), Some(Fallback::KeepLowest { dice: 2 }));
    }

    #[test]
    fn empty_pool_keep_lowest_success() {
        let pool = build_pool(-2, &[], false);
        let mut dice = FixedDice::new([5, 4]);
        let outcome = evaluate(&pool, &mut dice).unwrap();
        assert_eq!(outcome.success_count(), 1);
    }

    #[test]
    fn count_all_fallback_counts_both_dice() {
        let pool = build_pool(0, &[], false);
        let mut dice = FixedDice::new([6, 4]);
        let outcome = evaluate_with(&pool, Fallback::CountAll { dice: 2 }, &mut dice).unwrap();
        assert_eq!(outcome.success_count(), 2);
        assert_eq!(outcome.kept(), None);
    }

    #[test]
    fn invalid_pool_fails_before_rolling() {
        let pool = DicePool::new(3, 9);
        let mut dice = FixedDice::new([6]);
        let err = evaluate(&pool, &mut dice).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool(_)));
        assert_eq!(dice.drawn(), 0);
    }

    #[test]
    fn zero_dice_fallback_is_invalid() {
        let pool = DicePool::new(0, 4);
        let mut dice = FixedDice::new([6]);
        let result = evaluate_with(&pool, Fallback::CountAll { dice: 0 }, &mut dice);
        assert!(matches!(result, Err(MechError::InvalidPool(_))));
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let pool = DicePool::new(4, 5);
        let a = evaluate(&pool, &mut FixedDice::new([2, 5, 6, 1])).unwrap();
        let b = evaluate(&pool, &mut FixedDice::new([2, 5, 6, 1])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_formula() {
        let pool = DicePool::new(0, 6);
        assert_eq!(Fallback::default().formula(&pool), "2d6cs>=6kl");
        assert_eq!(Fallback::CountAll { dice: 2 }.formula(&pool), "2d6cs>=6");
    }
}
