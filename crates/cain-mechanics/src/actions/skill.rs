//! Skill action rolls.
//!
//! The pool is the skill rating plus bonus dice, one die each for teamwork
//! and setup, and the character's whole divine agony if they spend it.
//! Spending resets agony to zero; failing outright earns one back.

use super::{ActionKind, ActionResult, roll_site};
use crate::config::CallSite;
use crate::dice::{DiceSource, build_pool};
use crate::error::{MechError, MechResult};
use crate::escalation::Effect;
use crate::host::StatSource;
use crate::sheet::stats;

/// A request to roll one skill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRoll {
    /// Skill stat name (e.g. "force", "covert").
    pub skill: String,
    /// Situational bonus (or penalty) dice.
    pub extra_dice: i32,
    /// Another exorcist is helping.
    pub teamwork: bool,
    /// The action was set up by an earlier one.
    pub setup: bool,
    /// Spend all divine agony for bonus dice.
    pub spend_divine_agony: bool,
    /// Only sixes succeed.
    pub hard: bool,
}

impl SkillRoll {
    /// Roll `skill` with no modifiers.
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            ..Self::default()
        }
    }

    /// Add bonus dice.
    pub fn with_extra_dice(mut self, dice: i32) -> Self {
        self.extra_dice = dice;
        self
    }

    /// Mark the roll as a teamwork roll.
    pub fn with_teamwork(mut self, teamwork: bool) -> Self {
        self.teamwork = teamwork;
        self
    }

    /// Mark the roll as set up.
    pub fn with_setup(mut self, setup: bool) -> Self {
        self.setup = setup;
        self
    }

    /// Spend divine agony on the roll.
    pub fn spending_divine_agony(mut self, spend: bool) -> Self {
        self.spend_divine_agony = spend;
        self
    }

    /// Make the roll hard.
    pub fn hard(mut self, hard: bool) -> Self {
        self.hard = hard;
        self
    }

    /// Resolve the roll against `sheet`.
    pub fn roll<H, S>(&self, sheet: &H, site: &CallSite, source: &mut S) -> MechResult<ActionResult>
    where
        H: StatSource + ?Sized,
        S: DiceSource + ?Sized,
    {
        let rating = sheet
            .stat(&self.skill)
            .ok_or_else(|| MechError::UnknownStat(self.skill.clone()))?;

        let mut modifiers = vec![
            self.extra_dice,
            i32::from(self.teamwork),
            i32::from(self.setup),
        ];
        let mut leading = Vec::new();
        if self.spend_divine_agony {
            modifiers.push(sheet.stat(stats::DIVINE_AGONY).unwrap_or(0));
            leading.push(Effect::set(stats::DIVINE_AGONY, 0));
        }

        let pool = build_pool(rating, &modifiers, self.hard);
        let label = format!("{} Roll", capitalize(&self.skill));
        roll_site(ActionKind::Skill, label, pool, site, leading, source)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleBook;
    use crate::dice::FixedDice;
    use crate::sheet::{CharacterSheet, Track};

    fn sheet() -> CharacterSheet {
        CharacterSheet::new("Ash")
            .with_stat("force", 2)
            .with_track(
                stats::DIVINE_AGONY,
                Track::with_range("Divine Agony", 2, 0, stats::DIVINE_AGONY_MAX),
            )
    }

    #[test]
    fn pool_includes_all_bonuses() {
        let book = RuleBook::default();
        let roll = SkillRoll::new("force")
            .with_extra_dice(1)
            .with_teamwork(true)
            .with_setup(true);
        let mut dice = FixedDice::new([6, 5, 3, 2, 1]);
        let result = roll.roll(&sheet(), &book.skill, &mut dice).unwrap();
        assert_eq!(result.pool.die_count, 5);
        assert_eq!(result.outcome.success_count(), 2);
        assert_eq!(result.label, "Force Roll");
        assert!(result.effects.is_empty());
    }

    #[test]
    fn spending_agony_adds_dice_and_resets() {
        let book = RuleBook::default();
        let roll = SkillRoll::new("force").spending_divine_agony(true);
        let mut dice = FixedDice::new([4, 1, 1, 1]);
        let result = roll.roll(&sheet(), &book.skill, &mut dice).unwrap();
        assert_eq!(result.pool.die_count, 4);
        assert_eq!(result.effects, vec![Effect::set(stats::DIVINE_AGONY, 0)]);
    }

    #[test]
    fn zero_successes_gain_agony() {
        let book = RuleBook::default();
        let mut dice = FixedDice::new([1, 3]);
        let result = SkillRoll::new("force")
            .roll(&sheet(), &book.skill, &mut dice)
            .unwrap();
        assert_eq!(result.outcome.success_count(), 0);
        assert_eq!(result.effects, vec![Effect::adjust(stats::DIVINE_AGONY, 1)]);
    }

    #[test]
    fn hard_roll_needs_sixes() {
        let book = RuleBook::default();
        let mut dice = FixedDice::new([5, 6]);
        let result = SkillRoll::new("force")
            .hard(true)
            .roll(&sheet(), &book.skill, &mut dice)
            .unwrap();
        assert_eq!(result.pool.success_threshold, 6);
        assert_eq!(result.outcome.success_count(), 1);
    }

    #[test]
    fn empty_pool_keeps_lowest() {
        let book = RuleBook::default();
        let mut dice = FixedDice::new([6, 2]);
        let result = SkillRoll::new("force")
            .with_extra_dice(-3)
            .roll(&sheet(), &book.skill, &mut dice)
            .unwrap();
        assert_eq!(result.pool.die_count, 0);
        assert_eq!(result.outcome.results(), &[6, 2]);
        assert_eq!(result.outcome.kept(), Some(2));
        assert_eq!(result.formula(), "2d6cs>=4kl");
        assert_eq!(result.effects, vec![Effect::adjust(stats::DIVINE_AGONY, 1)]);
    }

    #[test]
    fn unknown_skill_is_an_error() {
        let book = RuleBook::default();
        let mut dice = FixedDice::new([6]);
        let err = SkillRoll::new("juggling")
            .roll(&sheet(), &book.skill, &mut dice)
            .unwrap_err();
        assert!(matches!(err, MechError::UnknownStat(name) if name == "juggling"));
    }

    #[test]
    fn capitalize_names() {
        assert_eq!(capitalize("covert"), "Covert");
        assert_eq!(capitalize(""), "");
    }
}
