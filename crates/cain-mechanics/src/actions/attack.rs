//! NPC basic attacks: one d6 picks a damage tier.

use serde::{Deserialize, Serialize};

use super::{ActionKind, ActionResult};
use crate::config::{HIGH_DAMAGE, LOW_DAMAGE, MEDIUM_DAMAGE};
use crate::dice::{DicePool, DiceSource, NORMAL_THRESHOLD};
use crate::error::MechResult;
use crate::escalation::{Effect, RuleTable};
use crate::resolution;

/// The damage an NPC deals at each tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcAttack {
    /// Damage on a good roll for the defender.
    pub low: String,
    /// Damage on a middling roll.
    pub medium: String,
    /// Damage on a bad roll.
    pub high: String,
}

impl NpcAttack {
    /// An attack with the given damage per tier.
    pub fn new(low: impl Into<String>, medium: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            medium: medium.into(),
            high: high.into(),
        }
    }

    /// Roll the attack. The tier table is first-match; each tier tag is
    /// replaced by a line naming the damage dealt.
    pub fn roll<S>(&self, tiers: &RuleTable, source: &mut S) -> MechResult<ActionResult>
    where
        S: DiceSource + ?Sized,
    {
        let pool = DicePool::new(1, NORMAL_THRESHOLD);
        let outcome = resolution::evaluate(&pool, source)?;
        let effects = tiers
            .apply(&outcome)
            .into_iter()
            .map(|effect| self.describe(effect))
            .collect();

        Ok(ActionResult {
            kind: ActionKind::NpcAttack,
            label: "Attack Roll".to_string(),
            pool,
            outcome,
            effects,
        })
    }

    fn describe(&self, effect: Effect) -> Effect {
        match effect {
            Effect::ApplyTag { tag } if tag == LOW_DAMAGE => {
                Effect::narrate(format!("Low Damage: {}", self.low))
            }
            Effect::ApplyTag { tag } if tag == MEDIUM_DAMAGE => {
                Effect::narrate(format!("Medium Damage: {}", self.medium))
            }
            Effect::ApplyTag { tag } if tag == HIGH_DAMAGE => {
                Effect::narrate(format!("High Damage: {}", self.high))
            }
            other => other,
        }
    }
}
