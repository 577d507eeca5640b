//! Conditions over a roll outcome.

use serde::{Deserialize, Serialize};

use crate::dice::RollOutcome;

/// A test an escalation rule runs against a [`RollOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Predicate {
    /// Always matches; useful as the last rule of a first-match table.
    Always,
    /// The success count equals `count`.
    SuccessesEq {
        /// Required success count.
        count: u32,
    },
    /// The success count is at least `count`.
    SuccessesAtLeast {
        /// Minimum success count.
        count: u32,
    },
    /// The success count is at most `count`.
    SuccessesAtMost {
        /// Maximum success count.
        count: u32,
    },
    /// At least `count` dice show `face`.
    FaceCountAtLeast {
        /// The face to look for.
        face: u32,
        /// Minimum number of dice showing it.
        count: u32,
    },
    /// Exactly `count` dice show `face`.
    FaceCountEq {
        /// The face to look for.
        face: u32,
        /// Exact number of dice showing it.
        count: u32,
    },
    /// The highest die is at least `value`.
    HighestAtLeast {
        /// Minimum highest value.
        value: u32,
    },
    /// The lowest die is at most `value`.
    LowestAtMost {
        /// Maximum lowest value.
        value: u32,
    },
}

impl Predicate {
    /// Whether `outcome` satisfies this predicate.
    pub fn matches(&self, outcome: &RollOutcome) -> bool {
        match *self {
            Self::Always => true,
            Self::SuccessesEq { count } => outcome.success_count() == count,
            Self::SuccessesAtLeast { count } => outcome.success_count() >= count,
            Self::SuccessesAtMost { count } => outcome.success_count() <= count,
            Self::FaceCountAtLeast { face, count } => outcome.count_face(face) >= count,
            Self::FaceCountEq { face, count } => outcome.count_face(face) == count,
            Self::HighestAtLeast { value } => outcome.highest() >= value,
            Self::LowestAtMost { value } => {
                !outcome.counted().is_empty() && outcome.lowest() <= value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DicePool;

    fn outcome(values: &[u32]) -> RollOutcome {
        RollOutcome::from_results(DicePool::new(values.len() as u32, 4), values.to_vec())
    }

    #[test]
    fn success_predicates() {
        let o = outcome(&[6, 4, 1]);
        assert!(Predicate::SuccessesEq { count: 2 }.matches(&o));
        assert!(Predicate::SuccessesAtLeast { count: 2 }.matches(&o));
        assert!(!Predicate::SuccessesAtLeast { count: 3 }.matches(&o));
        assert!(Predicate::SuccessesAtMost { count: 2 }.matches(&o));
        assert!(!Predicate::SuccessesAtMost { count: 1 }.matches(&o));
    }

    #[test]
    fn face_predicates() {
        let o = outcome(&[1, 1, 3]);
        assert!(Predicate::FaceCountAtLeast { face: 1, count: 2 }.matches(&o));
        assert!(!Predicate::FaceCountAtLeast { face: 1, count: 3 }.matches(&o));
        assert!(Predicate::FaceCountEq { face: 3, count: 1 }.matches(&o));
        assert!(!Predicate::FaceCountEq { face: 1, count: 1 }.matches(&o));
    }

    #[test]
    fn fallback_only_sees_kept_die() {
        let o = RollOutcome::kept_lowest(
            DicePool::new(0, 4),
            vec![6, 2],
            crate::resolution::Fallback::KeepLowest { dice: 2 },
        );
        assert!(!Predicate::HighestAtLeast { value: 6 }.matches(&o));
        assert!(Predicate::FaceCountEq { face: 6, count: 0 }.matches(&o));
        assert!(Predicate::LowestAtMost { value: 2 }.matches(&o));
    }

    #[test]
    fn extreme_predicates() {
        let o = outcome(&[2, 5]);
        assert!(Predicate::HighestAtLeast { value: 5 }.matches(&o));
        assert!(!Predicate::HighestAtLeast { value: 6 }.matches(&o));
        assert!(Predicate::LowestAtMost { value: 2 }.matches(&o));
        assert!(!Predicate::LowestAtMost { value: 1 }.matches(&o));
        assert!(!Predicate::LowestAtMost { value: 6 }.matches(&outcome(&[])));
        assert!(Predicate::Always.matches(&outcome(&[])));
    }
}
