//! Core trait for anything that can be placed on a timeline.

use std::fmt;
use std::time::Duration;

use crate::scene::{PropertyKey, PropertyValue};

/// A property value produced by sampling an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyWrite {
    /// Property being written.
    pub key: PropertyKey,
    /// Sampled value.
    pub value: PropertyValue,
    /// Offset from the root animation's start at which the producing
    /// animation began writing. Writes are applied in this order, so the
    /// most recently started animation owns a contested property.
    pub started_at: Duration,
}

/// Something that writes element properties as a function of time.
///
/// Implementations are pure: sampling the same offset twice produces the
/// same writes. That lets a runner jump to any point, including the end,
/// without stepping through intermediate frames.
pub trait Animation: Send + Sync + fmt::Debug {
    /// Delay between being started and the first write.
    fn start_delay(&self) -> Duration;

    /// Duration of the active part, after the start delay.
    ///
    /// `None` means the animation repeats forever.
    fn active_duration(&self) -> Option<Duration>;

    /// Start delay plus active duration, or `None` if infinite.
    fn total_duration(&self) -> Option<Duration> {
        self.active_duration().map(|d| self.start_delay() + d)
    }

    /// Append the writes for `elapsed` time since the animation was
    /// started.
    ///
    /// `origin` is the offset, relative to the root of the timeline, at
    /// which this animation was started. Nothing is written before the start
    /// delay has passed; after the end the final values are held.
    fn sample(
        &self,
        elapsed: Duration,
        origin: Duration,
        out: &mut Vec<PropertyWrite>,
    );

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for owned animations stored on timelines.
pub type BoxedAnimation = Box<dyn Animation>;

/// Box any [`Animation`] implementation.
#[must_use]
pub fn boxed<A: Animation + 'static>(animation: A) -> BoxedAnimation {
    Box::new(animation)
}
