//! Dice pool construction.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Sides on the standard CAIN die.
pub const D6: u32 = 6;

/// Success threshold for a normal roll (4, 5 or 6 succeeds).
pub const NORMAL_THRESHOLD: u32 = 4;

/// Success threshold for a hard roll (only 6 succeeds).
pub const HARD_THRESHOLD: u32 = 6;

/// How a single die is compared against the pool's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// The die succeeds when its value is at or above the threshold.
    #[default]
    AtLeast,
    /// The die succeeds only when its value equals the threshold.
    Exactly,
}

/// The dice rolled for one action resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    /// Number of dice to roll. Zero triggers the call site's fallback pool.
    pub die_count: u32,
    /// Face value a die is compared against.
    pub success_threshold: u32,
    /// Sides on each die.
    pub sides: u32,
    /// How dice are compared against the threshold.
    #[serde(default)]
    pub comparison: Comparison,
}

impl DicePool {
    /// A pool of d6s counting dice at or above `success_threshold`.
    pub fn new(die_count: u32, success_threshold: u32) -> Self {
        Self {
            die_count,
            success_threshold,
            sides: D6,
            comparison: Comparison::AtLeast,
        }
    }

    /// A pool of d6s counting only dice showing exactly `face`.
    pub fn counting_face(die_count: u32, face: u32) -> Self {
        Self {
            comparison: Comparison::Exactly,
            ..Self::new(die_count, face)
        }
    }

    /// Replace the die size.
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Returns true if this pool rolls no dice on its own.
    pub fn is_empty(&self) -> bool {
        self.die_count == 0
    }

    /// Returns true if the pool only counts maximum faces.
    pub fn is_hard(&self) -> bool {
        self.comparison == Comparison::AtLeast && self.success_threshold == self.sides
    }

    /// Whether a single die value counts as a success in this pool.
    pub fn passes(&self, value: u32) -> bool {
        match self.comparison {
            Comparison::AtLeast => value >= self.success_threshold,
            Comparison::Exactly => value == self.success_threshold,
        }
    }

    /// Check that the pool describes dice that can actually be rolled.
    pub fn validate(&self) -> MechResult<()> {
        if self.sides == 0 {
            return Err(MechError::InvalidPool("dice must have at least one side".into()));
        }
        if self.success_threshold == 0 || self.success_threshold > self.sides {
            return Err(MechError::InvalidPool(format!(
                "threshold {} is not a face of a d{}",
                self.success_threshold, self.sides
            )));
        }
        Ok(())
    }

    /// Render the pool in dice notation, e.g. `5d6cs>=4` or `3d6cs=1`.
    ///
    /// A pool where every face succeeds has no suffix (`4d3`).
    pub fn formula(&self) -> String {
        format!(
            "{}d{}{}",
            self.die_count,
            self.sides,
            suffix(self.comparison, self.success_threshold)
        )
    }
}

/// The count-successes suffix for a comparison and threshold.
pub(crate) fn suffix(comparison: Comparison, threshold: u32) -> String {
    match comparison {
        Comparison::AtLeast if threshold <= 1 => String::new(),
        Comparison::AtLeast => format!("cs>={threshold}"),
        Comparison::Exactly => format!("cs={threshold}"),
    }
}

/// Build a d6 pool from a base rating and situational modifiers.
///
/// The die count is `base_rating + sum(modifiers)` clamped at zero; a hard
/// roll only counts sixes.
pub fn build_pool(base_rating: i32, modifiers: &[i32], hard: bool) -> DicePool {
    let total = modifiers
        .iter()
        .fold(base_rating, |acc, m| acc.saturating_add(*m));
    let die_count = u32::try_from(total).unwrap_or(0);
    let threshold = if hard { HARD_THRESHOLD } else { NORMAL_THRESHOLD };
    DicePool::new(die_count, threshold)
}
