//! Transition describes one animated day/night switch.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::set::AnimatorSet;
use crate::scene::{PropertyKey, PropertyValue};

/// Whether the scene currently shows day or night.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Sun up, blue sky, clouds visible.
    #[default]
    Day,
    /// Sun below the horizon, night sky, moon and stars visible.
    Night,
}

impl Phase {
    /// The other phase.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Night => f.write_str("night"),
        }
    }
}

/// What a transition does to the star-twinkle ambient loop when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwinkleCue {
    /// Leave the loop as it is.
    #[default]
    Keep,
    /// Start the loop (restarting it if already running).
    Start,
    /// Stop the loop, leaving stars where they are.
    Stop,
}

/// One full day→night or night→day animated sequence.
///
/// Consumers obtain transitions from a
/// [`TransitionStyle`](super::styles::TransitionStyle).
pub struct Transition {
    /// Debug name, e.g. `"classic sunset"`.
    pub name: &'static str,
    /// Every finite effect of the transition, rooted in one set.
    pub timeline: AnimatorSet,
    /// Writes applied once the timeline completes, restoring a baseline
    /// for the next transition.
    pub resets: Vec<(PropertyKey, PropertyValue)>,
    /// Phase the scene is in after completion.
    pub end_phase: Phase,
    /// Effect on the star-twinkle loop at start.
    pub twinkle: TwinkleCue,
}

impl Transition {
    /// Transition ending in `end_phase`, with no resets and no twinkle cue.
    #[must_use]
    pub fn new(name: &'static str, timeline: AnimatorSet, end_phase: Phase) -> Self {
        Self {
            name,
            timeline,
            resets: Vec::new(),
            end_phase,
            twinkle: TwinkleCue::Keep,
        }
    }

    /// Add completion resets.
    #[must_use]
    pub fn with_resets(
        mut self,
        resets: impl IntoIterator<Item = (PropertyKey, PropertyValue)>,
    ) -> Self {
        self.resets.extend(resets);
        self
    }

    /// Set the effect on the star-twinkle loop.
    #[must_use]
    pub fn with_twinkle(mut self, cue: TwinkleCue) -> Self {
        self.twinkle = cue;
        self
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("nodes", &self.timeline.len())
            .field("resets", &self.resets.len())
            .field("end_phase", &self.end_phase)
            .field("twinkle", &self.twinkle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::set::AnimatorSetBuilder;
    use crate::scene::{ElementId, Property};

    #[test]
    fn phase_toggles() {
        assert_eq!(Phase::Day.toggled(), Phase::Night);
        assert_eq!(Phase::Night.toggled(), Phase::Day);
        assert_eq!(Phase::default(), Phase::Day);
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Phase::Night).unwrap(), "\"night\"");
        assert_eq!(Phase::Day.to_string(), "day");
    }

    #[test]
    fn builder_collects_resets() {
        let timeline = AnimatorSetBuilder::new("empty").build().unwrap();
        let t = Transition::new("test", timeline, Phase::Night)
            .with_resets([(
                PropertyKey::new(ElementId::Sun, Property::Alpha),
                PropertyValue::Float(1.0),
            )])
            .with_twinkle(TwinkleCue::Start);
        assert_eq!(t.resets.len(), 1);
        assert_eq!(t.twinkle, TwinkleCue::Start);
        assert!(format!("{t:?}").contains("test"));
    }
}
