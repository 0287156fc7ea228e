//! Animation runner executes a single animation against wall-clock time.

use std::time::Duration;

use web_time::Instant;

use super::traits::{Animation, BoxedAnimation, PropertyWrite};
use crate::scene::PropertyTarget;

/// Plays one animation (usually an [`AnimatorSet`](super::AnimatorSet))
/// from a start instant.
///
/// The runner holds:
/// - the animation and its total duration
/// - timing information and a duration scale
/// - a scratch buffer for sampled writes
///
/// Writes are applied in the order their animations started, so when two
/// animations touch the same property the most recently started one wins.
#[derive(Debug)]
pub struct AnimationRunner {
    /// When the animation started.
    start_time: Instant,
    /// Animation being played.
    animation: BoxedAnimation,
    /// Unscaled total duration, `None` if infinite.
    total_duration: Option<Duration>,
    /// Multiplier on every duration; zero or less means instant.
    duration_scale: f32,
    /// Set once the final state has been written.
    finished: bool,
    writes: Vec<PropertyWrite>,
}

impl AnimationRunner {
    /// Start playing `animation` at `start_time`.
    #[must_use]
    pub fn new(
        animation: BoxedAnimation,
        start_time: Instant,
        duration_scale: f32,
    ) -> Self {
        let duration_scale = if duration_scale.is_finite() {
            duration_scale
        } else {
            log::warn!(
                "duration scale {duration_scale} is not finite, using 1.0"
            );
            1.0
        };
        Self {
            start_time,
            total_duration: animation.total_duration(),
            animation,
            duration_scale,
            finished: false,
            writes: Vec::new(),
        }
    }

    /// Debug name of the animation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.animation.name()
    }

    /// When the runner started.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Unscaled total duration, `None` if the animation never ends.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.total_duration
    }

    /// Whether durations are collapsed to zero.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration_scale <= 0.0
    }

    /// Animation time at `now`, after applying the duration scale.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let real = now.saturating_duration_since(self.start_time);
        if self.is_instant() {
            // Finite animations jump to the end; infinite ones stay frozen
            // on their first frame.
            return self.total_duration.unwrap_or_else(|| {
                self.animation.start_delay()
            });
        }
        // Tiny scales overflow; treat them as "long past the end".
        Duration::try_from_secs_f64(
            real.as_secs_f64() / f64::from(self.duration_scale),
        )
        .unwrap_or(Duration::MAX)
    }

    /// Calculate normalized progress (0.0 to 1.0). Infinite animations
    /// always report 0.0.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(total) = self.total_duration else {
            return 0.0;
        };
        if total.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / total.as_secs_f32()).min(1.0)
    }

    /// Whether the animation has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.finished
            || (self.total_duration.is_some() && self.progress(now) >= 1.0)
    }

    /// Whether the final state has already been written.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Write the animation state at `now` to `target`.
    ///
    /// Returns `true` while the animation is still running. The call that
    /// reaches the end writes the final state and returns `false`; later
    /// calls write nothing.
    pub fn update(&mut self, now: Instant, target: &mut dyn PropertyTarget) -> bool {
        if self.finished {
            return false;
        }
        let mut elapsed = self.elapsed(now);
        if let Some(total) = self.total_duration {
            if elapsed >= total {
                elapsed = total;
                self.finished = true;
            }
        }
        self.apply_at(elapsed, target);
        if self.finished {
            log::debug!("{} finished", self.name());
        }
        !self.finished
    }

    /// Jump to the end, writing the final state.
    ///
    /// Infinite animations are left running.
    pub fn finish(&mut self, target: &mut dyn PropertyTarget) {
        if self.finished {
            return;
        }
        if let Some(total) = self.total_duration {
            self.apply_at(total, target);
            self.finished = true;
        }
    }

    fn apply_at(&mut self, elapsed: Duration, target: &mut dyn PropertyTarget) {
        self.writes.clear();
        self.animation.sample(elapsed, Duration::ZERO, &mut self.writes);
        self.writes.sort_by_key(|write| write.started_at);
        for write in &self.writes {
            target.apply(write.key, write.value);
        }
    }
}
