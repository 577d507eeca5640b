//! Side-effect descriptions produced by escalation rules.

use serde::{Deserialize, Serialize};

/// A side effect for the caller to apply after a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Adjust a stat by a delta.
    AdjustStat {
        /// Name of the stat to adjust.
        stat: String,
        /// Amount to change (positive or negative).
        delta: i32,
    },
    /// Overwrite a stat with a fixed value.
    SetStat {
        /// Name of the stat to set.
        stat: String,
        /// The new value.
        value: i32,
    },
    /// Apply a status tag to the character (e.g. an injury).
    ApplyTag {
        /// The tag to apply.
        tag: String,
    },
    /// Text to include in the roll announcement.
    Narrate {
        /// The line to announce.
        text: String,
    },
}

impl Effect {
    /// Shorthand for [`Effect::AdjustStat`].
    pub fn adjust(stat: impl Into<String>, delta: i32) -> Self {
        Self::AdjustStat {
            stat: stat.into(),
            delta,
        }
    }

    /// Shorthand for [`Effect::SetStat`].
    pub fn set(stat: impl Into<String>, value: i32) -> Self {
        Self::SetStat {
            stat: stat.into(),
            value,
        }
    }

    /// Shorthand for [`Effect::ApplyTag`].
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::ApplyTag { tag: tag.into() }
    }

    /// Shorthand for [`Effect::Narrate`].
    pub fn narrate(text: impl Into<String>) -> Self {
        Self::Narrate { text: text.into() }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdjustStat { stat, delta } => {
                if *delta >= 0 {
                    write!(f, "{stat} +{delta}")
                } else {
                    write!(f, "{stat} {delta}")
                }
            }
            Self::SetStat { stat, value } => write!(f, "{stat} = {value}"),
            Self::ApplyTag { tag } => write!(f, "Tag: {tag}"),
            Self::Narrate { text } => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Effect::adjust("divine_agony", 1).to_string(), "divine_agony +1");
        assert_eq!(Effect::adjust("stress", -2).to_string(), "stress -2");
        assert_eq!(Effect::set("divine_agony", 0).to_string(), "divine_agony = 0");
        assert_eq!(Effect::tag("injury").to_string(), "Tag: injury");
        assert_eq!(Effect::narrate("Low Damage: 1").to_string(), "Low Damage: 1");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Effect::tag("injury")).unwrap();
        assert_eq!(json, r#"{"kind":"apply_tag","tag":"injury"}"#);
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Effect::tag("injury"));
    }
}
