//! Rolls on lookup tables (afflictions, sin-mark abilities).

use serde::Serialize;

use crate::dice::DiceSource;
use crate::error::{MechError, MechResult};
use crate::sheet::CharacterSheet;

/// Rerolls tried before [`roll_unused`] takes the first free entry.
const MAX_REROLLS: usize = 64;

/// A die roll and the table entry it selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRoll<'a> {
    /// The face rolled (1-based).
    pub roll: u32,
    /// The selected entry.
    pub entry: &'a str,
}

/// Roll a die sized to `entries` and return the selected entry.
pub fn roll_table<'a, S>(name: &str, entries: &'a [String], source: &mut S) -> MechResult<TableRoll<'a>>
where
    S: DiceSource + ?Sized,
{
    let (roll, index) = roll_index(name, entries.len(), source)?;
    Ok(TableRoll {
        roll,
        entry: entries[index].as_str(),
    })
}

/// Roll 1dN for a table of `len` entries, returning the face and its index.
pub(crate) fn roll_index<S>(name: &str, len: usize, source: &mut S) -> MechResult<(u32, usize)>
where
    S: DiceSource + ?Sized,
{
    let sides = u32::try_from(len).unwrap_or(u32::MAX);
    if sides == 0 {
        return Err(MechError::EmptyTable(name.to_string()));
    }
    let roll = source.roll_die(sides);
    let index = roll
        .checked_sub(1)
        .map(|index| index as usize)
        .filter(|&index| index < len)
        .ok_or_else(|| {
            MechError::InvalidPool(format!("rolled {roll} on the {sides}-entry table '{name}'"))
        })?;
    Ok((roll, index))
}

/// Roll on `entries`, rerolling anything already in `taken`.
///
/// Returns `None` when every entry is taken. After a bounded number of
/// rerolls the first untaken entry is used.
pub fn roll_unused<'a, S>(
    name: &str,
    entries: &'a [String],
    taken: &[String],
    source: &mut S,
) -> MechResult<Option<TableRoll<'a>>>
where
    S: DiceSource + ?Sized,
{
    let is_taken = |entry: &str| taken.iter().any(|t| t == entry);
    let Some(first_free) = entries.iter().position(|e| !is_taken(e.as_str())) else {
        return Ok(None);
    };

    for _ in 0..MAX_REROLLS {
        let rolled = roll_table(name, entries, source)?;
        if !is_taken(rolled.entry) {
            return Ok(Some(rolled));
        }
    }

    tracing::debug!(table = name, "reroll limit reached, taking first free entry");
    Ok(Some(TableRoll {
        roll: first_free as u32 + 1,
        entry: entries[first_free].as_str(),
    }))
}

/// Roll on the character's affliction table.
pub fn roll_affliction<'a, S>(sheet: &'a CharacterSheet, source: &mut S) -> MechResult<TableRoll<'a>>
where
    S: DiceSource + ?Sized,
{
    roll_table("afflictions", &sheet.afflictions, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;

    fn abilities() -> Vec<String> {
        ["Horns", "Wings", "Claws", "Tail", "Eyes", "Voice"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn selects_by_face() {
        let table = abilities();
        let mut dice = FixedDice::new([3]);
        let rolled = roll_table("abilities", &table, &mut dice).unwrap();
        assert_eq!(rolled, TableRoll { roll: 3, entry: "Claws" });
    }

    #[test]
    fn empty_table_is_an_error() {
        let mut dice = FixedDice::new([1]);
        let err = roll_table("afflictions", &[], &mut dice).unwrap_err();
        assert!(matches!(err, MechError::EmptyTable(name) if name == "afflictions"));
    }

    #[test]
    fn rerolls_taken_entries() {
        let table = abilities();
        let taken = vec!["Horns".to_string(), "Wings".to_string()];
        let mut dice = FixedDice::new([1, 2, 5]);
        let rolled = roll_unused("abilities", &table, &taken, &mut dice)
            .unwrap()
            .unwrap();
        assert_eq!(rolled.entry, "Eyes");
        assert_eq!(dice.drawn(), 3);
    }

    #[test]
    fn exhausted_table_returns_none() {
        let table = abilities();
        let mut dice = FixedDice::new([1]);
        let rolled = roll_unused("abilities", &table, &table, &mut dice).unwrap();
        assert!(rolled.is_none());
        assert_eq!(dice.drawn(), 0);
    }

    #[test]
    fn reroll_limit_takes_first_free() {
        let table = abilities();
        let taken = vec!["Horns".to_string()];
        let mut dice = FixedDice::new([1]);
        let rolled = roll_unused("abilities", &table, &taken, &mut dice)
            .unwrap()
            .unwrap();
        assert_eq!(rolled, TableRoll { roll: 2, entry: "Wings" });
    }

    #[test]
    fn affliction_from_sheet() {
        let mut sheet = CharacterSheet::new("Ash");
        sheet.afflictions = vec!["Shaken".into(), "Bleeding".into()];
        let mut dice = FixedDice::new([2]);
        assert_eq!(roll_affliction(&sheet, &mut dice).unwrap().entry, "Bleeding");
    }
}
