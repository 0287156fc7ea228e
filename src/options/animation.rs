use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::transition::Phase;
use crate::error::SunsetError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Transition playback settings.
pub struct AnimationOptions {
    /// When false, a tap jumps straight to the end of the transition.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Multiplier applied to every duration and delay. Zero or less means
    /// instant.
    #[schemars(title = "Duration Scale", range(min = 0.0, max = 10.0))]
    pub duration_scale: f32,
    /// Phase the scene starts in.
    #[schemars(title = "Initial Phase")]
    pub initial_phase: Phase,
    /// Use the alternate style for the first transition.
    #[schemars(title = "Start With Alternate Style")]
    pub start_with_alternate: bool,
    /// Seed for star-twinkle start offsets. Random when absent.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twinkle_seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_scale: 1.0,
            initial_phase: Phase::Day,
            start_with_alternate: false,
            twinkle_seed: None,
        }
    }
}

impl AnimationOptions {
    /// Reject values the schema range does not cover and TOML still
    /// accepts, such as `nan` and `inf`.
    pub fn validate(&self) -> Result<(), SunsetError> {
        if self.duration_scale.is_finite() && self.duration_scale <= 10.0 {
            Ok(())
        } else {
            Err(SunsetError::OptionsParse(format!(
                "animation.duration_scale must be a finite number up to 10, got {}",
                self.duration_scale
            )))
        }
    }
}
