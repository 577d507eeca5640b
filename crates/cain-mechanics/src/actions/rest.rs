//! Rest dice: 2d3 plus the character's rest-dice modifier.

use super::{ActionKind, ActionResult, roll_site};
use crate::config::CallSite;
use crate::dice::{DicePool, DiceSource};
use crate::error::MechResult;
use crate::host::StatSource;
use crate::sheet::stats;

/// Sides on a rest die.
pub const REST_DIE: u32 = 3;

/// Rest dice every character rolls before modifiers.
pub const BASE_REST_DICE: i32 = 2;

/// A rest roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestRoll;

impl RestRoll {
    /// The pool for a character with `modifier` bonus rest dice.
    pub fn pool(modifier: i32) -> DicePool {
        let count = u32::try_from(BASE_REST_DICE.saturating_add(modifier)).unwrap_or(0);
        DicePool::new(count, 1).with_sides(REST_DIE)
    }

    /// Roll rest dice for `sheet`.
    pub fn roll<H, S>(&self, sheet: &H, site: &CallSite, source: &mut S) -> MechResult<ActionResult>
    where
        H: StatSource + ?Sized,
        S: DiceSource + ?Sized,
    {
        let modifier = sheet.stat(stats::REST_DICE_MODIFIER).unwrap_or(0);
        roll_site(
            ActionKind::Rest,
            "Rest Dice".to_string(),
            Self::pool(modifier),
            site,
            Vec::new(),
            source,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleBook;
    use crate::dice::FixedDice;
    use crate::sheet::CharacterSheet;

    #[test]
    fn base_rest_dice() {
        let sheet = CharacterSheet::new("Ash");
        let mut dice = FixedDice::new([3, 1]);
        let result = RestRoll.roll(&sheet, &RuleBook::default().rest, &mut dice).unwrap();
        assert_eq!(result.pool.die_count, 2);
        assert_eq!(result.pool.sides, 3);
        assert_eq!(result.outcome.results(), &[3, 1]);
        assert_eq!(result.outcome.total(), 4);
    }

    #[test]
    fn modifier_adds_dice() {
        let sheet = CharacterSheet::new("Ash").with_stat(stats::REST_DICE_MODIFIER, 2);
        let mut dice = FixedDice::new([6, 5, 4, 2]);
        let result = RestRoll.roll(&sheet, &RuleBook::default().rest, &mut dice).unwrap();
        assert_eq!(result.outcome.results(), &[3, 2, 1, 2]);
        assert_eq!(result.formula(), "4d3");
    }

    #[test]
    fn negative_modifier_falls_back() {
        let pool = RestRoll::pool(-3);
        assert!(pool.is_empty());
        let sheet = CharacterSheet::new("Ash").with_stat(stats::REST_DICE_MODIFIER, -3);
        let mut dice = FixedDice::new([2, 2]);
        let result = RestRoll.roll(&sheet, &RuleBook::default().rest, &mut dice).unwrap();
        assert_eq!(result.outcome.results().len(), 2);
    }
}
