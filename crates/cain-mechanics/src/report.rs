//! Chat text for roll announcements.

use std::fmt;

use crate::actions::{ActionKind, ActionResult, SinMarkGain};
use crate::dice::Comparison;
use crate::error::MechResult;
use crate::escalation::Effect;
use crate::host::{MessageSink, Speaker};

const REST_RULES: &str = "Assign each die to one of: regain that many psyche bursts, \
recover that much stress, or erase that many slashes on a hook.";

/// Render the announcement text for a resolved action.
pub fn render_message(result: &ActionResult) -> String {
    Message(result).to_string().trim_end().to_string()
}

/// The chat text of one action, one line per fact.
struct Message<'a>(&'a ActionResult);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let outcome = &result.outcome;
        writeln!(f, "{}", result.label)?;

        match result.kind {
            ActionKind::Skill | ActionKind::Psyche => {
                writeln!(f, "Formula: {}", result.formula())?;
                writeln!(f, "Successes: {}", outcome.success_count())?;
                writeln!(f, "Dice Rolled: {}", marked_dice(result))?;
                if let Some(kept) = outcome.kept() {
                    writeln!(f, "Kept: {kept}")?;
                }
            }
            ActionKind::SevereAttack => {
                let hits = outcome.success_count();
                let others = (outcome.counted().len() as u32).saturating_sub(hits);
                writeln!(f, "Formula: {}", result.formula())?;
                writeln!(f, "Dice Rolled: {}", marked_dice(result))?;
                if let Some(kept) = outcome.kept() {
                    writeln!(f, "Kept: {kept}")?;
                }
                writeln!(f, "Number of 1's: {hits}")?;
                writeln!(f, "Other dice: {others}")?;
            }
            ActionKind::Rest => {
                writeln!(
                    f,
                    "Rolling {}d{}: {}",
                    outcome.results().len(),
                    result.pool.sides,
                    join(outcome.results())
                )?;
                writeln!(f, "{REST_RULES}")?;
            }
            ActionKind::NpcAttack => {
                writeln!(f, "Roll: {}", outcome.total())?;
            }
        }

        for effect in &result.effects {
            match effect {
                Effect::Narrate { text } => writeln!(f, "{text}")?,
                other => writeln!(f, "- {other}")?,
            }
        }
        Ok(())
    }
}

/// Render the announcement text for a sin-mark roll.
pub fn render_sin_mark(gain: &SinMarkGain) -> String {
    let chosen = if gain.chosen { " (chosen)" } else { "" };
    let new = if gain.new_mark { " (new)" } else { "" };
    format!(
        "Sin Mark\nMark Roll: {}{chosen}\nMark: {}{new}\nAbility Roll: {}\nAbility: {}",
        gain.mark_roll, gain.mark, gain.ability_roll, gain.ability
    )
}

/// Render `result` and post it to `sink` as `speaker`.
pub fn announce<K>(result: &ActionResult, speaker: &Speaker, sink: &mut K) -> MechResult<()>
where
    K: MessageSink + ?Sized,
{
    sink.post_message(&render_message(result), speaker)
}

/// Dice values with highlights: `*` on a natural maximum, `!` on a counted face.
fn marked_dice(result: &ActionResult) -> String {
    let pool = &result.pool;
    result
        .outcome
        .results()
        .iter()
        .map(|&v| {
            let marked = match pool.comparison {
                Comparison::AtLeast => v == pool.sides,
                Comparison::Exactly => pool.passes(v),
            };
            match (marked, pool.comparison) {
                (true, Comparison::AtLeast) => format!("{v}*"),
                (true, Comparison::Exactly) => format!("{v}!"),
                (false, _) => v.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
