//! Roll outcomes and aggregation.

use serde::Serialize;

use super::DicePool;
use crate::resolution::Fallback;

/// The result of evaluating a dice pool.
///
/// Immutable once produced: the evaluator is the only place that builds one
/// from live dice, and the accessors are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    pool: DicePool,
    results: Vec<u32>,
    success_count: u32,
    kept: Option<u32>,
    fallback: Option<Fallback>,
}

impl RollOutcome {
    /// Count successes over `results` using `pool`'s comparison.
    pub fn from_results(pool: DicePool, results: Vec<u32>) -> Self {
        let success_count = count_passing(&pool, &results);
        Self {
            pool,
            results,
            success_count,
            kept: None,
            fallback: None,
        }
    }

    /// Outcome of a fallback roll that counted every die.
    pub(crate) fn counted_fallback(pool: DicePool, results: Vec<u32>, fallback: Fallback) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::from_results(pool, results)
        }
    }

    /// Outcome of a fallback roll that keeps only the lowest die.
    pub(crate) fn kept_lowest(pool: DicePool, results: Vec<u32>, fallback: Fallback) -> Self {
        let kept = results.iter().copied().min();
        let success_count = u32::from(kept.is_some_and(|v| pool.passes(v)));
        Self {
            pool,
            results,
            success_count,
            kept,
            fallback: Some(fallback),
        }
    }

    /// Every die value rolled, in roll order, including dropped fallback dice.
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// Number of successes.
    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    /// The pool as requested by the caller.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// The single kept value when a keep-lowest fallback was used.
    pub fn kept(&self) -> Option<u32> {
        self.kept
    }

    /// The fallback substituted for an empty pool, if any.
    pub fn fallback(&self) -> Option<Fallback> {
        self.fallback
    }

    /// Returns true if the outcome has at least one success.
    pub fn is_success(&self) -> bool {
        self.success_count > 0
    }

    /// The dice that count toward the outcome: the kept die after a
    /// keep-lowest fallback, otherwise every die rolled.
    pub fn counted(&self) -> &[u32] {
        match &self.kept {
            Some(kept) => std::slice::from_ref(kept),
            None => &self.results,
        }
    }

    /// How many counted dice show exactly `face`.
    pub fn count_face(&self, face: u32) -> u32 {
        self.counted().iter().filter(|&&v| v == face).count() as u32
    }

    /// The highest counted die, or 0 if nothing was rolled.
    pub fn highest(&self) -> u32 {
        self.counted().iter().copied().max().unwrap_or(0)
    }

    /// The lowest counted die, or 0 if nothing was rolled.
    pub fn lowest(&self) -> u32 {
        self.counted().iter().copied().min().unwrap_or(0)
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.results.iter().sum()
    }
}

fn count_passing(pool: &DicePool, results: &[u32]) -> u32 {
    results.iter().filter(|&&v| pool.passes(v)).count() as u32
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.results.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        if let Some(kept) = self.kept {
            write!(f, " kept {kept}")?;
        }
        let noun = if self.success_count == 1 { "success" } else { "successes" };
        write!(f, " = {} {noun}", self.success_count)
    }
}
