//! Escalation rules: side effects triggered by patterns in a roll.
//!
//! Each roll type carries its own ordered [`RuleTable`]. Whether only the
//! first satisfied rule fires or every satisfied rule fires is a property of
//! the table ([`Mode`]), so the same engine serves zero-success resource
//! gains and cumulative minimum-face injuries alike. The engine only
//! describes effects; applying them is the caller's job.

pub mod effect;
pub mod predicate;

pub use effect::Effect;
pub use predicate::Predicate;

use serde::{Deserialize, Serialize};

use crate::dice::RollOutcome;

/// How many satisfied rules fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Stop at the first satisfied rule.
    #[default]
    FirstMatch,
    /// Fire every satisfied rule, in order.
    AllMatches,
}

/// A predicate paired with the effect it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationRule {
    /// When the rule fires.
    pub predicate: Predicate,
    /// What the rule produces.
    pub effect: Effect,
}

impl EscalationRule {
    /// Pair a predicate with an effect.
    pub fn new(predicate: Predicate, effect: Effect) -> Self {
        Self { predicate, effect }
    }
}

/// An ordered list of rules evaluated under one mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleTable {
    /// First-match or all-matches.
    #[serde(default)]
    pub mode: Mode,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<EscalationRule>,
}

impl RuleTable {
    /// An empty first-match table.
    pub fn first_match() -> Self {
        Self {
            mode: Mode::FirstMatch,
            rules: Vec::new(),
        }
    }

    /// An empty all-matches table.
    pub fn all_matches() -> Self {
        Self {
            mode: Mode::AllMatches,
            rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn rule(mut self, predicate: Predicate, effect: Effect) -> Self {
        self.rules.push(EscalationRule::new(predicate, effect));
        self
    }

    /// Evaluate this table against an outcome.
    pub fn apply(&self, outcome: &RollOutcome) -> Vec<Effect> {
        apply_rules(outcome, &self.rules, self.mode)
    }
}

/// Evaluate `rules` against `outcome` in order, returning triggered effects.
pub fn apply_rules(outcome: &RollOutcome, rules: &[EscalationRule], mode: Mode) -> Vec<Effect> {
    let mut matching = rules.iter().filter(|r| r.predicate.matches(outcome));
    match mode {
        Mode::FirstMatch => matching.next().map(|r| r.effect.clone()).into_iter().collect(),
        Mode::AllMatches => matching.map(|r| r.effect.clone()).collect(),
    }
}
