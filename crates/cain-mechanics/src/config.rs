//! Per-call-site roll configuration.
//!
//! Every roll type names its own fallback pool and escalation table. The
//! defaults reproduce the table rules; a JSON rule book can override any
//! subset of them.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::actions::SinMarkTable;
use crate::escalation::{Effect, Predicate, RuleTable};
use crate::resolution::Fallback;
use crate::sheet::stats;

/// Tag applied by the NPC attack table for a low-damage hit.
pub const LOW_DAMAGE: &str = "low";
/// Tag applied by the NPC attack table for a medium-damage hit.
pub const MEDIUM_DAMAGE: &str = "medium";
/// Tag applied by the NPC attack table for a high-damage hit.
pub const HIGH_DAMAGE: &str = "high";

/// How one roll type resolves an empty pool and escalates its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallSite {
    /// Pool rolled when the computed pool has no dice.
    #[serde(default)]
    pub fallback: Fallback,
    /// Escalation rules evaluated against every outcome.
    #[serde(default)]
    pub rules: RuleTable,
}

/// The escalation configuration of every roll type.
///
/// Deserializing overlays whatever the JSON names onto
/// [`RuleBook::default`], one field at a time: a site that only sets its
/// `fallback` keeps its own default `rules`, and the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleBookPatch")]
pub struct RuleBook {
    /// Skill action rolls.
    pub skill: CallSite,
    /// Psyche rolls.
    pub psyche: CallSite,
    /// NPC severe attacks.
    pub severe_attack: CallSite,
    /// Rest dice.
    pub rest: CallSite,
    /// NPC basic attack damage tiers.
    pub npc_attack: RuleTable,
    /// Sin marks a character can gain, each with its ability table.
    pub sin_marks: Vec<SinMarkTable>,
}

/// A rule book as written in JSON, every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuleBookPatch {
    skill: Option<CallSitePatch>,
    psyche: Option<CallSitePatch>,
    severe_attack: Option<CallSitePatch>,
    rest: Option<CallSitePatch>,
    npc_attack: Option<RuleTable>,
    sin_marks: Option<Vec<SinMarkTable>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CallSitePatch {
    fallback: Option<Fallback>,
    rules: Option<RuleTable>,
}

impl CallSitePatch {
    fn overlay(self, base: CallSite) -> CallSite {
        CallSite {
            fallback: self.fallback.unwrap_or(base.fallback),
            rules: self.rules.unwrap_or(base.rules),
        }
    }
}

fn overlay(patch: Option<CallSitePatch>, base: CallSite) -> CallSite {
    match patch {
        Some(patch) => patch.overlay(base),
        None => base,
    }
}

impl From<RuleBookPatch> for RuleBook {
    fn from(patch: RuleBookPatch) -> Self {
        let base = RuleBook::default();
        Self {
            skill: overlay(patch.skill, base.skill),
            psyche: overlay(patch.psyche, base.psyche),
            severe_attack: overlay(patch.severe_attack, base.severe_attack),
            rest: overlay(patch.rest, base.rest),
            npc_attack: patch.npc_attack.unwrap_or(base.npc_attack),
            sin_marks: patch.sin_marks.unwrap_or(base.sin_marks),
        }
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            skill: CallSite {
                fallback: Fallback::KeepLowest { dice: 2 },
                rules: RuleTable::first_match().rule(
                    Predicate::SuccessesEq { count: 0 },
                    Effect::adjust(stats::DIVINE_AGONY, 1),
                ),
            },
            psyche: CallSite {
                fallback: Fallback::CountAll { dice: 2 },
                rules: RuleTable::first_match(),
            },
            severe_attack: CallSite {
                fallback: Fallback::KeepLowest { dice: 2 },
                rules: RuleTable::all_matches()
                    .rule(
                        Predicate::FaceCountAtLeast { face: 1, count: 1 },
                        Effect::tag("injury"),
                    )
                    .rule(
                        Predicate::FaceCountAtLeast { face: 1, count: 2 },
                        Effect::tag("severe-injury"),
                    ),
            },
            rest: CallSite {
                fallback: Fallback::CountAll { dice: 2 },
                rules: RuleTable::first_match(),
            },
            npc_attack: RuleTable::first_match()
                .rule(Predicate::HighestAtLeast { value: 4 }, Effect::tag(LOW_DAMAGE))
                .rule(Predicate::HighestAtLeast { value: 2 }, Effect::tag(MEDIUM_DAMAGE))
                .rule(Predicate::Always, Effect::tag(HIGH_DAMAGE)),
            sin_marks: Vec::new(),
        }
    }
}

/// Configuration for a rolling session.
#[derive(Debug, Clone, Default)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Escalation rules per roll type.
    pub rules: RuleBook,
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the rule book.
    pub fn with_rules(mut self, rules: RuleBook) -> Self {
        self.rules = rules;
        self
    }

    /// Build the random source this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceSource;
    use crate::escalation::Mode;

    #[test]
    fn default_rule_book_modes() {
        let book = RuleBook::default();
        assert_eq!(book.skill.rules.mode, Mode::FirstMatch);
        assert_eq!(book.severe_attack.rules.mode, Mode::AllMatches);
        assert_eq!(book.severe_attack.rules.rules.len(), 2);
        assert_eq!(book.psyche.fallback, Fallback::CountAll { dice: 2 });
        assert_eq!(book.skill.fallback, Fallback::KeepLowest { dice: 2 });
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{ "psyche": { "fallback": { "kind": "keep_lowest", "dice": 3 } } }"#;
        let book: RuleBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.psyche.fallback, Fallback::KeepLowest { dice: 3 });
        assert!(book.psyche.rules.rules.is_empty());
        assert_eq!(book.skill, RuleBook::default().skill);
    }

    #[test]
    fn fallback_override_keeps_site_rules() {
        let json = r#"{ "severe_attack": { "fallback": { "kind": "count_all", "dice": 2 } } }"#;
        let book: RuleBook = serde_json::from_str(json).unwrap();
        let defaults = RuleBook::default();
        assert_eq!(book.severe_attack.fallback, Fallback::CountAll { dice: 2 });
        assert_eq!(book.severe_attack.rules, defaults.severe_attack.rules);
        assert_eq!(book.severe_attack.rules.mode, Mode::AllMatches);
    }

    #[test]
    fn rules_override_keeps_site_fallback() {
        let json = r#"{ "psyche": { "rules": { "rules": [
            { "predicate": { "when": "always" }, "effect": { "kind": "apply_tag", "tag": "rattled" } }
        ] } } }"#;
        let book: RuleBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.psyche.fallback, Fallback::CountAll { dice: 2 });
        assert_eq!(book.psyche.rules.rules.len(), 1);
        assert_eq!(book.rest, RuleBook::default().rest);
    }

    #[test]
    fn empty_json_is_the_default_book() {
        let book: RuleBook = serde_json::from_str("{}").unwrap();
        assert_eq!(book, RuleBook::default());
    }

    #[test]
    fn sin_marks_load_from_json() {
        let json = r#"{ "sin_marks": [ { "name": "Hunger", "abilities": ["a", "b"] } ] }"#;
        let book: RuleBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.sin_marks.len(), 1);
        assert_eq!(book.sin_marks[0].name, "Hunger");
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = RollConfig::default().with_seed(7);
        let mut a = cfg.rng();
        let mut b = cfg.rng();
        for _ in 0..10 {
            assert_eq!(a.roll_die(6), b.roll_die(6));
        }
    }

    #[test]
    fn builder_methods() {
        let cfg = RollConfig::default()
            .with_seed(123)
            .with_rules(RuleBook::default());
        assert_eq!(cfg.seed, Some(123));
    }
}
