//! Character records: skill ratings, resource tracks, and status tags.
//!
//! [`CharacterSheet`] is the in-process stand-in for the host's actor
//! document. It answers stat reads for pool sizing and accepts stat writes
//! through [`ResourceMutator`], clamping anything stored on a track.

pub mod track;

pub use track::Track;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::actions::SinMarkGain;
use crate::error::MechResult;
use crate::escalation::Effect;
use crate::host::{self, ResourceMutator, StatChange, StatSource};

/// Well-known stat names.
pub mod stats {
    /// Divine agony: spent for bonus dice, gained on a zero-success skill roll.
    pub const DIVINE_AGONY: &str = "divine_agony";
    /// Psyche rating, the base of a psyche roll.
    pub const PSYCHE: &str = "psyche";
    /// Bonus dice on the rest roll.
    pub const REST_DICE_MODIFIER: &str = "rest_dice_modifier";
    /// Cap on divine agony.
    pub const DIVINE_AGONY_MAX: i32 = 3;
}

/// A character's mechanical state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name; used as the chat speaker.
    pub name: String,
    /// Plain integer stats (skills, psyche, modifiers).
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
    /// Bounded resources keyed by stat name.
    #[serde(default)]
    pub tracks: BTreeMap<String, Track>,
    /// The six-entry affliction table rolled with a d6.
    #[serde(default)]
    pub afflictions: Vec<String>,
    /// Status tags applied by escalation rules.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sin marks borne, in the order they were gained.
    #[serde(default)]
    pub sin_marks: Vec<SinMark>,
}

/// A sin mark on a character and the abilities gained from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinMark {
    /// Mark name.
    pub name: String,
    /// Abilities gained, oldest first.
    pub abilities: Vec<String>,
}

impl std::fmt::Display for SinMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.abilities.join(", "))
    }
}

impl CharacterSheet {
    /// A sheet with no stats and an empty divine agony track.
    pub fn new(name: impl Into<String>) -> Self {
        let mut sheet = Self {
            name: name.into(),
            ..Self::default()
        };
        sheet.tracks.insert(
            stats::DIVINE_AGONY.to_string(),
            Track::empty("Divine Agony", stats::DIVINE_AGONY_MAX),
        );
        sheet
    }

    /// Set a plain stat.
    pub fn with_stat(mut self, name: impl Into<String>, value: i32) -> Self {
        self.stats.insert(name.into(), value);
        self
    }

    /// Add or replace a track.
    pub fn with_track(mut self, key: impl Into<String>, track: Track) -> Self {
        self.tracks.insert(key.into(), track);
        self
    }

    /// Returns true if the sheet carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Apply every effect: stat writes go through [`host::apply_effects`],
    /// tags are recorded once each, narration is ignored.
    pub fn apply(&mut self, effects: &[Effect]) -> MechResult<Vec<StatChange>> {
        let changes = host::apply_effects(effects, self)?;
        let tags = effects.iter().filter_map(|e| match e {
            Effect::ApplyTag { tag } => Some(tag),
            _ => None,
        });
        for tag in tags {
            if !self.has_tag(tag) {
                self.tags.push(tag.clone());
            }
        }
        Ok(changes)
    }

    /// Record a sin-mark roll, extending the mark if it is already borne.
    pub fn record_sin_mark(&mut self, gain: &SinMarkGain) {
        match self.sin_marks.iter_mut().find(|m| m.name == gain.mark) {
            Some(mark) => mark.abilities.push(gain.ability.clone()),
            None => self.sin_marks.push(SinMark {
                name: gain.mark.clone(),
                abilities: vec![gain.ability.clone()],
            }),
        }
    }

    /// Remove the sin mark at `index`, if there is one.
    pub fn remove_sin_mark(&mut self, index: usize) -> Option<SinMark> {
        (index < self.sin_marks.len()).then(|| self.sin_marks.remove(index))
    }

    /// Remove every sin mark.
    pub fn clear_sin_marks(&mut self) {
        self.sin_marks.clear();
    }
}

impl StatSource for CharacterSheet {
    fn stat(&self, name: &str) -> Option<i32> {
        self.tracks
            .get(name)
            .map(|t| t.current)
            .or_else(|| self.stats.get(name).copied())
    }
}

impl ResourceMutator for CharacterSheet {
    fn set_stat(&mut self, name: &str, value: i32) -> MechResult<()> {
        if let Some(track) = self.tracks.get_mut(name) {
            track.set(value);
        } else {
            self.stats.insert(name.to_string(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> CharacterSheet {
        CharacterSheet::new("Ash")
            .with_stat("force", 2)
            .with_stat(stats::PSYCHE, 3)
    }

    #[test]
    fn reads_stats_and_tracks() {
        let s = sheet();
        assert_eq!(s.stat("force"), Some(2));
        assert_eq!(s.stat(stats::DIVINE_AGONY), Some(0));
        assert_eq!(s.stat("covert"), None);
    }

    #[test]
    fn track_writes_are_clamped() {
        let mut s = sheet();
        s.set_stat(stats::DIVINE_AGONY, 9).unwrap();
        assert_eq!(s.stat(stats::DIVINE_AGONY), Some(3));
    }

    #[test]
    fn unknown_stat_write_creates_it() {
        let mut s = sheet();
        s.set_stat("kit_points", 2).unwrap();
        assert_eq!(s.stat("kit_points"), Some(2));
    }

    #[test]
    fn apply_records_tags_once() {
        let mut s = sheet();
        let effects = vec![
            Effect::tag("injury"),
            Effect::tag("injury"),
            Effect::adjust(stats::DIVINE_AGONY, 1),
            Effect::narrate("ignored"),
        ];
        let changes = s.apply(&effects).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(s.tags, vec!["injury".to_string()]);
        assert_eq!(s.stat(stats::DIVINE_AGONY), Some(1));
    }

    #[test]
    fn agony_gain_stops_at_cap() {
        let mut s = sheet();
        s.set_stat(stats::DIVINE_AGONY, 3).unwrap();
        let changes = s.apply(&[Effect::adjust(stats::DIVINE_AGONY, 1)]).unwrap();
        assert_eq!(changes[0].after, 3);
    }

    fn gain(mark: &str, ability: &str) -> SinMarkGain {
        SinMarkGain {
            mark_roll: 1,
            chosen: false,
            mark: mark.to_string(),
            ability_roll: 1,
            ability: ability.to_string(),
            new_mark: true,
        }
    }

    #[test]
    fn sin_marks_accumulate_abilities() {
        let mut s = sheet();
        s.record_sin_mark(&gain("Hunger", "Gnaw"));
        s.record_sin_mark(&gain("Wrath", "Burn"));
        s.record_sin_mark(&gain("Hunger", "Devour"));
        assert_eq!(s.sin_marks.len(), 2);
        assert_eq!(s.sin_marks[0].to_string(), "Hunger - Gnaw, Devour");

        assert_eq!(s.remove_sin_mark(1).map(|m| m.name), Some("Wrath".to_string()));
        assert_eq!(s.remove_sin_mark(5), None);
        s.clear_sin_marks();
        assert!(s.sin_marks.is_empty());
    }

    #[test]
    fn loads_from_json() {
        let json = r#"{
            "name": "Ash",
            "stats": { "force": 2 },
            "tracks": { "divine_agony": { "name": "Divine Agony", "current": 1, "max": 3 } },
            "afflictions": ["Shaken", "Bleeding"]
        }"#;
        let s: CharacterSheet = serde_json::from_str(json).unwrap();
        assert_eq!(s.stat("force"), Some(2));
        assert_eq!(s.stat(stats::DIVINE_AGONY), Some(1));
        assert_eq!(s.afflictions.len(), 2);
        assert!(s.tags.is_empty());
        assert!(s.sin_marks.is_empty());
    }
}
