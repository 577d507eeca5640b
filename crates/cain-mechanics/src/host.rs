//! Narrow contracts to the host's stat store and chat.
//!
//! The resolver never touches these itself. Callers read stats through
//! [`StatSource`] to size a pool, then push the returned effects through
//! [`apply_effects`] and announce the result on a [`MessageSink`].

use serde::{Deserialize, Serialize};

use crate::error::MechResult;
use crate::escalation::Effect;

/// Read-only access to named integer stats on a character record.
pub trait StatSource {
    /// The current value of `name`, or `None` if the character has no such stat.
    fn stat(&self, name: &str) -> Option<i32>;
}

/// Writes a single stat back to the host's document store.
pub trait ResourceMutator {
    /// Persist `value` for `name`. The host may clamp it.
    fn set_stat(&mut self, name: &str, value: i32) -> MechResult<()>;
}

/// Posts rendered roll announcements.
pub trait MessageSink {
    /// Post `text` on behalf of `speaker`.
    fn post_message(&mut self, text: &str, speaker: &Speaker) -> MechResult<()>;
}

/// Who a chat message is attributed to. Opaque to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Speaker(pub String);

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message sink that keeps every post in memory.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Posted messages in order, with their speakers.
    pub messages: Vec<(Speaker, String)>,
}

impl MessageSink for Transcript {
    fn post_message(&mut self, text: &str, speaker: &Speaker) -> MechResult<()> {
        self.messages.push((speaker.clone(), text.to_string()));
        Ok(())
    }
}

/// A stat write performed while applying effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatChange {
    /// The stat that was written.
    pub stat: String,
    /// Value before the write (`None` if the stat did not exist).
    pub before: Option<i32>,
    /// Value after the write, as reported back by the host.
    pub after: i32,
}

/// Apply the stat effects in `effects` to `host`, in order.
///
/// Tags and narration are not stat writes and are skipped here. Stops at
/// the first failed write.
pub fn apply_effects<H>(effects: &[Effect], host: &mut H) -> MechResult<Vec<StatChange>>
where
    H: StatSource + ResourceMutator + ?Sized,
{
    let mut changes = Vec::new();
    for effect in effects {
        let (stat, target) = match effect {
            Effect::AdjustStat { stat, delta } => {
                let current = host.stat(stat).unwrap_or(0);
                (stat, current.saturating_add(*delta))
            }
            Effect::SetStat { stat, value } => (stat, *value),
            Effect::ApplyTag { .. } | Effect::Narrate { .. } => continue,
        };
        let before = host.stat(stat);
        host.set_stat(stat, target)?;
        let after = host.stat(stat).unwrap_or(target);
        tracing::debug!(stat = %stat, ?before, after, "stat updated");
        changes.push(StatChange {
            stat: stat.clone(),
            before,
            after,
        });
    }
    Ok(changes)
}
