//! Ambient loops: infinite animations that run beside the transitions.
//!
//! Waves start with the scene and never stop. The star twinkle is started
//! by a transition cue and stopped by another, leaving the stars wherever
//! the loop left them.

use std::time::Duration;

use rand::Rng;

use super::property::{PropertyAnimator, RepeatCount, RepeatMode};
use super::set::{AnimatorSet, AnimatorSetBuilder};
use crate::error::SunsetError;
use crate::options::LayoutOptions;
use crate::scene::{ElementId, Property};
use crate::util::easing::EasingFunction;

/// Upper bound of the random twinkle start offset.
const TWINKLE_JITTER_MS: u64 = 1000;

fn looping(animator: PropertyAnimator) -> PropertyAnimator {
    animator.repeating(RepeatCount::Infinite, RepeatMode::Reverse)
}

/// Wave `i` bobs by ±(20 + 10·i) over 2000 + 500·i ms, starting 300·i ms
/// in, while its opacity pulses between 0.2 + 0.05·i and 0.4 + 0.05·i.
pub fn waves(layout: &LayoutOptions) -> Result<AnimatorSet, SunsetError> {
    let mut set = AnimatorSetBuilder::new("waves");
    for i in layout.wave_indices() {
        let index = u64::from(i);
        let duration = Duration::from_millis(2000 + 500 * index);
        let delay = Duration::from_millis(300 * index);
        let amplitude = 20.0 + 10.0 * f32::from(i);
        let base_alpha = 0.2 + 0.05 * f32::from(i);

        let _ = set.add(
            looping(PropertyAnimator::floats(
                ElementId::Wave(i),
                Property::TranslationY,
                &[-amplitude, amplitude],
                duration,
            ))
            .with_easing(EasingFunction::Linear)
            .with_delay(delay),
        );
        let _ = set.add(
            looping(PropertyAnimator::floats(
                ElementId::Wave(i),
                Property::Alpha,
                &[base_alpha, base_alpha + 0.2],
                duration,
            ))
            .with_delay(delay),
        );
    }
    set.build()
}

/// Stars pulse in size and their reflections shimmer, each on its own
/// random offset so the sky does not blink in unison.
pub fn twinkle<R: Rng>(
    layout: &LayoutOptions,
    rng: &mut R,
) -> Result<AnimatorSet, SunsetError> {
    let mut set = AnimatorSetBuilder::new("star twinkle");
    let mut jitter = || Duration::from_millis(rng.random_range(0..TWINKLE_JITTER_MS));

    for i in layout.star_indices() {
        for property in [Property::ScaleX, Property::ScaleY] {
            let _ = set.add(
                looping(PropertyAnimator::floats(
                    ElementId::Star(i),
                    property,
                    &[1.0, 1.3, 1.0],
                    Duration::from_millis(800),
                ))
                .with_delay(jitter()),
            );
        }
    }
    for i in layout.star_indices() {
        let _ = set.add(
            looping(PropertyAnimator::floats(
                ElementId::StarReflection(i),
                Property::Alpha,
                &[0.3, 0.5],
                Duration::from_millis(1000),
            ))
            .with_delay(jitter() + Duration::from_millis(3000)),
        );
    }
    log::debug!("prepared twinkle for {} stars", layout.star_count);
    set.build()
}
