//! Roll types: the call sites that size a pool from live stats, evaluate
//! it, and run their own escalation table.
//!
//! Every pool action returns an [`ActionResult`] and leaves the character
//! untouched; the caller applies the effects and posts the announcement.
//! Sin-mark rolls return a [`SinMarkGain`] for the caller to record.

pub mod attack;
pub mod psyche;
pub mod rest;
pub mod severe;
pub mod sin_mark;
pub mod skill;
pub mod table;

pub use attack::NpcAttack;
pub use psyche::PsycheRoll;
pub use rest::RestRoll;
pub use severe::{SevereAttack, question_modifier};
pub use sin_mark::{SinMarkGain, SinMarkRoll, SinMarkTable};
pub use skill::SkillRoll;
pub use table::{TableRoll, roll_affliction, roll_table, roll_unused};

use serde::Serialize;

use crate::config::CallSite;
use crate::dice::{DicePool, DiceSource, RollOutcome};
use crate::error::MechResult;
use crate::escalation::Effect;
use crate::resolution;

/// Which roll produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A skill action roll.
    Skill,
    /// A psyche roll.
    Psyche,
    /// An NPC severe attack.
    SevereAttack,
    /// Rest dice.
    Rest,
    /// An NPC basic attack.
    NpcAttack,
}

/// Everything a caller needs to announce a roll and update the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    /// Which roll this was.
    pub kind: ActionKind,
    /// Heading for the announcement, e.g. "Force Roll".
    pub label: String,
    /// The pool requested by the action.
    pub pool: DicePool,
    /// The evaluated dice.
    pub outcome: RollOutcome,
    /// Effects for the caller to apply, in order.
    pub effects: Vec<Effect>,
}

impl ActionResult {
    /// The dice notation actually rolled, fallback included.
    pub fn formula(&self) -> String {
        match self.outcome.fallback() {
            Some(fallback) => fallback.formula(&self.pool),
            None => self.pool.formula(),
        }
    }
}

/// Evaluate `pool` under `site`, prepending `leading` to the rule effects.
fn roll_site<S>(
    kind: ActionKind,
    label: String,
    pool: DicePool,
    site: &CallSite,
    leading: Vec<Effect>,
    source: &mut S,
) -> MechResult<ActionResult>
where
    S: DiceSource + ?Sized,
{
    if pool.is_empty() {
        tracing::info!(%label, fallback = %site.fallback.formula(&pool), "empty pool, rolling fallback");
    } else {
        tracing::debug!(%label, formula = %pool.formula(), "rolling pool");
    }

    let outcome = resolution::evaluate_with(&pool, site.fallback, source)?;
    let mut effects = leading;
    effects.extend(site.rules.apply(&outcome));

    tracing::debug!(
        %label,
        successes = outcome.success_count(),
        effects = effects.len(),
        "roll resolved"
    );

    Ok(ActionResult {
        kind,
        label,
        pool,
        outcome,
        effects,
    })
}
