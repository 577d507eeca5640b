//! Bounded resource tracks (divine agony, stress, kit points, ...).
//!
//! A track is a clamped numeric value. Writes through the host contract
//! land here, so a zero-success agony gain can never push past the cap.

use serde::{Deserialize, Serialize};

/// A named numeric resource clamped between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Minimum value (usually 0).
    #[serde(default)]
    pub min: i32,
}

impl Track {
    /// Create a track starting at zero with the given maximum.
    pub fn empty(name: impl Into<String>, max: i32) -> Self {
        Self::with_range(name, 0, 0, max)
    }

    /// Create a track with a custom minimum and starting value.
    pub fn with_range(name: impl Into<String>, current: i32, min: i32, max: i32) -> Self {
        Self {
            name: name.into(),
            current: current.clamp(min, max),
            max,
            min,
        }
    }

    /// Set the track, clamping to bounds. Returns the stored value.
    pub fn set(&mut self, value: i32) -> i32 {
        self.current = value.clamp(self.min, self.max);
        self.current
    }

    /// Adjust the track by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.set(self.current.saturating_add(delta))
    }

    /// Returns true if the track is at its minimum value.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
