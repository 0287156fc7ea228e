//! Keyframe animation of a single element property.

use std::time::Duration;

use super::traits::{Animation, PropertyWrite};
use crate::scene::{ElementId, Property, PropertyKey, PropertyValue};
use crate::util::color::Argb;
use crate::util::easing::EasingFunction;

/// Values an animator moves through, evenly spaced over one iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyframes {
    /// Scalar keyframes.
    Float(Vec<f32>),
    /// Color keyframes, interpolated in linear light.
    Color(Vec<Argb>),
}

impl Keyframes {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        match self {
            Self::Float(values) => values.len(),
            Self::Color(values) => values.len(),
        }
    }

    /// Value at an eased position in `[0, 1]`.
    fn value_at(&self, eased: f32) -> PropertyValue {
        let count = self.len();
        let (index, local) = if count < 2 {
            (0, 0.0)
        } else {
            let segment = eased.clamp(0.0, 1.0) * (count - 1) as f32;
            let index = (segment.floor() as usize).min(count - 2);
            (index, segment - index as f32)
        };
        match self {
            Self::Float(values) => {
                let start = values.get(index).copied().unwrap_or_default();
                let end = values.get(index + 1).copied().unwrap_or(start);
                if local >= 1.0 {
                    PropertyValue::Float(end)
                } else {
                    PropertyValue::Float(start + (end - start) * local)
                }
            }
            Self::Color(values) => {
                let start =
                    values.get(index).copied().unwrap_or(Argb::TRANSPARENT);
                let end = values.get(index + 1).copied().unwrap_or(start);
                PropertyValue::Color(start.lerp(end, local))
            }
        }
    }
}

/// How many times an animator plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatCount {
    /// Play a single iteration.
    #[default]
    Once,
    /// Play once, then repeat this many more times.
    Times(u32),
    /// Repeat until cancelled.
    Infinite,
}

/// What a repeated iteration does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Every iteration plays forwards.
    #[default]
    Restart,
    /// Odd iterations play backwards.
    Reverse,
}

/// Animates one property of one element through a list of keyframes.
///
/// Easing is applied to the fraction of the current iteration, then the
/// surrounding pair of keyframes is interpolated. The default easing is
/// [`EasingFunction::DEFAULT`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAnimator {
    key: PropertyKey,
    keyframes: Keyframes,
    duration: Duration,
    start_delay: Duration,
    easing: EasingFunction,
    repeat: RepeatCount,
    repeat_mode: RepeatMode,
}

impl PropertyAnimator {
    fn new(key: PropertyKey, keyframes: Keyframes, duration: Duration) -> Self {
        if keyframes.is_empty() {
            log::warn!("{key} animator has no keyframes and will not write");
        }
        Self {
            key,
            keyframes,
            duration,
            start_delay: Duration::ZERO,
            easing: EasingFunction::DEFAULT,
            repeat: RepeatCount::Once,
            repeat_mode: RepeatMode::Restart,
        }
    }

    /// Animate a scalar property through `values` over `duration`.
    #[must_use]
    pub fn floats(
        element: ElementId,
        property: Property,
        values: &[f32],
        duration: Duration,
    ) -> Self {
        Self::new(
            PropertyKey::new(element, property),
            Keyframes::Float(values.to_vec()),
            duration,
        )
    }

    /// Animate the background color of `element` through `values`.
    #[must_use]
    pub fn colors(element: ElementId, values: &[Argb], duration: Duration) -> Self {
        Self::new(
            PropertyKey::new(element, Property::BackgroundColor),
            Keyframes::Color(values.to_vec()),
            duration,
        )
    }

    /// Set the delay before the first write.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Set custom easing.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set how often and in which direction the animator repeats.
    #[must_use]
    pub fn repeating(mut self, count: RepeatCount, mode: RepeatMode) -> Self {
        self.repeat = count;
        self.repeat_mode = mode;
        self
    }

    /// Property this animator writes.
    #[must_use]
    pub fn key(&self) -> PropertyKey {
        self.key
    }

    /// Keyframes this animator moves through.
    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    /// Duration of a single iteration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing applied to each iteration.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Value for a fraction of one forward iteration.
    #[must_use]
    pub fn value_at(&self, fraction: f32) -> PropertyValue {
        self.keyframes.value_at(self.easing.evaluate(fraction))
    }

    fn iterations(&self) -> Option<u64> {
        match self.repeat {
            RepeatCount::Once => Some(1),
            RepeatCount::Times(extra) => Some(1 + u64::from(extra)),
            RepeatCount::Infinite => None,
        }
    }

    /// Iteration fraction `elapsed` into the active part.
    fn fraction(&self, active: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.end_fraction();
        }
        if let Some(total) = self.active_duration() {
            if active >= total {
                return self.end_fraction();
            }
        }
        let position = active.as_secs_f64() / self.duration.as_secs_f64();
        let iteration = position.floor();
        let fraction = (position - iteration) as f32;
        if self.repeat_mode == RepeatMode::Reverse && iteration as u64 % 2 == 1
        {
            1.0 - fraction
        } else {
            fraction
        }
    }

    /// Fraction the last iteration finishes on.
    fn end_fraction(&self) -> f32 {
        match (self.repeat_mode, self.iterations()) {
            (RepeatMode::Reverse, Some(n)) if n % 2 == 0 => 0.0,
            _ => 1.0,
        }
    }
}

impl Animation for PropertyAnimator {
    fn start_delay(&self) -> Duration {
        self.start_delay
    }

    fn active_duration(&self) -> Option<Duration> {
        let iterations = self.iterations()?;
        Some(self.duration.mul_f64(iterations as f64))
    }

    fn sample(
        &self,
        elapsed: Duration,
        origin: Duration,
        out: &mut Vec<PropertyWrite>,
    ) {
        if elapsed < self.start_delay || self.keyframes.is_empty() {
            return;
        }
        let fraction = self.fraction(elapsed - self.start_delay);
        out.push(PropertyWrite {
            key: self.key,
            value: self.value_at(fraction),
            started_at: origin + self.start_delay,
        });
    }

    fn name(&self) -> &'static str {
        "property"
    }
}
