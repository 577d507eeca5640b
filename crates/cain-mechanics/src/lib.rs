//! Dice-pool resolution engine for the CAIN tabletop horror RPG.
//!
//! Rolls are pools of d6s counted for successes at 4+ (6 on a hard roll).
//! The crate builds pools from live character stats, evaluates them against
//! an injected random source, and runs per-roll-type escalation tables that
//! describe side effects (divine agony gains, injuries, damage tiers) for
//! the caller to apply. Nothing here performs I/O or touches global
//! randomness.

pub mod actions;
pub mod config;
pub mod dice;
pub mod error;
pub mod escalation;
pub mod formula;
pub mod host;
pub mod report;
pub mod resolution;
pub mod sheet;

pub use actions::{
    ActionKind, ActionResult, NpcAttack, PsycheRoll, RestRoll, SevereAttack, SinMarkGain,
    SinMarkRoll, SinMarkTable, SkillRoll,
};
pub use config::{CallSite, RollConfig, RuleBook};
pub use dice::{Comparison, DicePool, DiceSource, FixedDice, RollOutcome, build_pool};
pub use error::{MechError, MechResult};
pub use escalation::{Effect, EscalationRule, Mode, Predicate, RuleTable, apply_rules};
pub use formula::{DiceFormula, parse_die_count};
pub use host::{MessageSink, ResourceMutator, Speaker, StatSource, apply_effects};
pub use report::{render_message, render_sin_mark};
pub use resolution::{Fallback, evaluate, evaluate_with};
pub use sheet::{CharacterSheet, SinMark, Track};
