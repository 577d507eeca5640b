//! Dice pools, roll outcomes, and random sources.
//!
//! Every roll in CAIN is a pool of d6s counted for successes. A pool is
//! built fresh from live stats for each action and never stored; the
//! resulting [`RollOutcome`] is consumed immediately by the caller.

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::{Comparison, D6, DicePool, HARD_THRESHOLD, NORMAL_THRESHOLD, build_pool};
pub use roll::RollOutcome;
pub use source::{DiceSource, FixedDice};
