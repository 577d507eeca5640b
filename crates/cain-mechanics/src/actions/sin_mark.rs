//! Sin marks: roll which mark a character takes, then an ability on it.
//!
//! The mark die is sized to the catalogue. On its top face the player may
//! pick the mark instead. A character who already bears the mark rerolls
//! the ability until it is one they do not have yet.

use serde::{Deserialize, Serialize};

use super::table::{roll_index, roll_table, roll_unused};
use crate::dice::DiceSource;
use crate::error::{MechError, MechResult};
use crate::sheet::SinMark;

const MARK_TABLE: &str = "sin marks";

/// One sin mark and the abilities it can grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinMarkTable {
    /// Mark name, e.g. "Hunger".
    pub name: String,
    /// Abilities rolled with a die sized to the list.
    pub abilities: Vec<String>,
}

/// The mark and ability a sin-mark roll produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinMarkGain {
    /// Face shown by the mark die.
    pub mark_roll: u32,
    /// The player picked the mark on the top face.
    pub chosen: bool,
    /// Name of the mark gained or extended.
    pub mark: String,
    /// Face shown by the final ability roll.
    pub ability_roll: u32,
    /// The ability gained.
    pub ability: String,
    /// The character did not bear this mark before.
    pub new_mark: bool,
}

/// A sin-mark roll, optionally with the mark to pick on the top face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinMarkRoll {
    choice: Option<String>,
}

impl SinMarkRoll {
    /// A roll that keeps whatever the mark die shows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick `mark` if the mark die lands on its top face.
    pub fn choosing(mut self, mark: impl Into<String>) -> Self {
        self.choice = Some(mark.into());
        self
    }

    /// Roll a mark from `catalogue` and an ability the character lacks.
    pub fn roll<S>(
        &self,
        catalogue: &[SinMarkTable],
        held: &[SinMark],
        source: &mut S,
    ) -> MechResult<SinMarkGain>
    where
        S: DiceSource + ?Sized,
    {
        let (mark_roll, rolled) = roll_index(MARK_TABLE, catalogue.len(), source)?;
        let top_face = rolled + 1 == catalogue.len();

        let (index, chosen) = match (&self.choice, top_face) {
            (Some(name), true) => (find_mark(catalogue, name)?, true),
            _ => (rolled, false),
        };
        let table = &catalogue[index];

        let existing = held.iter().find(|mark| mark.name == table.name);
        let ability = match existing {
            Some(mark) => roll_unused(&table.name, &table.abilities, &mark.abilities, source)?
                .ok_or_else(|| MechError::TableExhausted(table.name.clone()))?,
            None => roll_table(&table.name, &table.abilities, source)?,
        };

        tracing::debug!(
            mark = %table.name,
            ability = ability.entry,
            chosen,
            new_mark = existing.is_none(),
            "sin mark rolled"
        );

        Ok(SinMarkGain {
            mark_roll,
            chosen,
            mark: table.name.clone(),
            ability_roll: ability.roll,
            ability: ability.entry.to_string(),
            new_mark: existing.is_none(),
        })
    }
}

fn find_mark(catalogue: &[SinMarkTable], name: &str) -> MechResult<usize> {
    catalogue
        .iter()
        .position(|mark| mark.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| MechError::UnknownEntry {
            table: MARK_TABLE.to_string(),
            entry: name.to_string(),
        })
}
