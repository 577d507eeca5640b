//! Psyche rolls.

use super::{ActionKind, ActionResult, roll_site};
use crate::config::CallSite;
use crate::dice::{DiceSource, build_pool};
use crate::error::MechResult;
use crate::host::StatSource;
use crate::sheet::stats;

/// A psyche roll with optional extra dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PsycheRoll {
    /// Additional dice from the roll dialog.
    pub extra_dice: i32,
    /// Only sixes succeed.
    pub hard: bool,
}

impl PsycheRoll {
    /// A psyche roll with `extra_dice` bonus dice.
    pub fn new(extra_dice: i32, hard: bool) -> Self {
        Self { extra_dice, hard }
    }

    /// Resolve the roll. A missing or zero psyche rating counts as 1.
    pub fn roll<H, S>(&self, sheet: &H, site: &CallSite, source: &mut S) -> MechResult<ActionResult>
    where
        H: StatSource + ?Sized,
        S: DiceSource + ?Sized,
    {
        let psyche = sheet
            .stat(stats::PSYCHE)
            .filter(|&p| p != 0)
            .unwrap_or(1);
        let pool = build_pool(psyche, &[self.extra_dice], self.hard);
        roll_site(
            ActionKind::Psyche,
            "Psyche Roll".to_string(),
            pool,
            site,
            Vec::new(),
            source,
        )
    }
}
