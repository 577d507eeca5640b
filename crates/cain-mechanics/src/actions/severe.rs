//! NPC severe attacks.
//!
//! The base pool comes from the NPC's stored formula text. Only ones count,
//! and every one rolled escalates the harm dealt.

use super::{ActionKind, ActionResult, roll_site};
use crate::config::CallSite;
use crate::dice::{DicePool, DiceSource};
use crate::error::MechResult;
use crate::formula::parse_die_count;

/// The face a severe attack counts.
pub const SEVERE_FACE: u32 = 1;

/// A severe attack rolled from an NPC's formula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SevereAttack {
    /// Stored formula text, e.g. "3d6".
    pub formula: String,
    /// Dice added or removed by the attack dialog.
    pub modifier: i32,
}

impl SevereAttack {
    /// A severe attack using `formula` adjusted by `modifier` dice.
    pub fn new(formula: impl Into<String>, modifier: i32) -> Self {
        Self {
            formula: formula.into(),
            modifier,
        }
    }

    /// The pool this attack rolls.
    pub fn pool(&self) -> DicePool {
        let base = parse_die_count(&self.formula);
        if base == 0 {
            tracing::warn!(formula = %self.formula, "no die count in severe attack formula");
        }
        let base = i32::try_from(base).unwrap_or(i32::MAX);
        let count = u32::try_from(base.saturating_add(self.modifier)).unwrap_or(0);
        DicePool::counting_face(count, SEVERE_FACE)
    }

    /// Resolve the attack.
    pub fn roll<S>(&self, site: &CallSite, source: &mut S) -> MechResult<ActionResult>
    where
        S: DiceSource + ?Sized,
    {
        roll_site(
            ActionKind::SevereAttack,
            "Severe Attack Roll".to_string(),
            self.pool(),
            site,
            Vec::new(),
            source,
        )
    }
}

/// Net dice modifier from the attack dialog's yes/no questions.
///
/// Each answered question adds one die in the favoured direction and
/// removes one otherwise; `None` answers are skipped.
pub fn question_modifier(answers: &[Option<bool>], yes_adds: bool) -> i32 {
    let (yes, no) = if yes_adds { (1, -1) } else { (-1, 1) };
    answers
        .iter()
        .flatten()
        .map(|&answer| if answer { yes } else { no })
        .sum()
}
