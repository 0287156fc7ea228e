//! Transition styles define how the day/night switch is animated.
//!
//! Styles are decoupled from the controller: the controller only decides
//! which style slot plays next, and users can swap the style in each slot.

mod classic;
mod spiral;
mod traits;

use std::time::Duration;

pub use classic::Classic;
pub use spiral::Spiral;
pub use traits::{shared, SharedStyle, StyleContext, TransitionStyle};

use super::property::PropertyAnimator;
use super::set::{AnimatorSetBuilder, NodeId};
use super::traits::Animation;
use crate::options::LayoutOptions;
use crate::scene::{ElementId, Property, PropertyKey, PropertyValue};
use crate::util::color::Argb;
use crate::util::easing::EasingFunction;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Float animator with the default easing.
fn tween(
    element: ElementId,
    property: Property,
    values: &[f32],
    millis: u64,
) -> PropertyAnimator {
    PropertyAnimator::floats(element, property, values, ms(millis))
}

/// Constant-speed rotation from 0 to `degrees`.
fn spin(element: ElementId, degrees: f32, millis: u64) -> PropertyAnimator {
    tween(element, Property::Rotation, &[0.0, degrees], millis)
        .with_easing(EasingFunction::Linear)
}

/// Sky background blend.
fn sky(from: Argb, to: Argb, millis: u64) -> PropertyAnimator {
    PropertyAnimator::colors(ElementId::Sky, &[from, to], ms(millis))
}

/// The sun's vertical path between its layout top and the horizon.
fn sun_path(
    layout: &LayoutOptions,
    setting: bool,
    millis: u64,
    easing: EasingFunction,
) -> PropertyAnimator {
    let (from, to) = if setting {
        (layout.sun_top, layout.sky_height)
    } else {
        (layout.sky_height, layout.sun_top)
    };
    tween(ElementId::Sun, Property::Y, &[from, to], millis).with_easing(easing)
}

/// Matching scaleX and scaleY animators.
fn scale(element: ElementId, values: &[f32], millis: u64) -> [PropertyAnimator; 2] {
    [
        tween(element, Property::ScaleX, values, millis),
        tween(element, Property::ScaleY, values, millis),
    ]
}

/// Add `animation` so that it starts together with `anchor`.
fn join(
    set: &mut AnimatorSetBuilder,
    anchor: NodeId,
    animation: impl Animation + 'static,
) {
    let node = set.add(animation);
    set.with(anchor, node);
}

fn reset(
    element: ElementId,
    property: Property,
    value: f32,
) -> (PropertyKey, PropertyValue) {
    (
        PropertyKey::new(element, property),
        PropertyValue::Float(value),
    )
}

/// Star scale back to 1 after twinkling.
fn star_scale_resets(
    layout: &LayoutOptions,
) -> impl Iterator<Item = (PropertyKey, PropertyValue)> {
    layout.star_indices().flat_map(|i| {
        [
            reset(ElementId::Star(i), Property::ScaleX, 1.0),
            reset(ElementId::Star(i), Property::ScaleY, 1.0),
        ]
    })
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;
    use web_time::Instant;

    use super::*;
    use crate::animation::runner::AnimationRunner;
    use crate::animation::transition::{Phase, Transition, TwinkleCue};
    use crate::options::PaletteOptions;
    use crate::scene::{PropertyTarget, Scene};

    fn build(
        style: &dyn TransitionStyle,
        phase: Phase,
    ) -> (Transition, LayoutOptions, PaletteOptions) {
        let layout = LayoutOptions::default();
        let palette = PaletteOptions::default();
        let ctx = StyleContext {
            layout: &layout,
            palette: &palette,
        };
        let transition = style.transition_from(phase, &ctx).unwrap();
        (transition, layout, palette)
    }

    /// Play a transition on a scene and return the scene at `at`.
    fn play_until(transition: Transition, start_phase: Phase, at: u64) -> Scene {
        let mut scene = Scene::new(
            &LayoutOptions::default(),
            &PaletteOptions::default(),
            start_phase,
        );
        let start = Instant::now();
        let mut runner =
            AnimationRunner::new(Box::new(transition.timeline), start, 1.0);
        let _ = runner.update(start + ms(at), &mut scene);
        scene
    }

    fn total_ms(transition: &Transition) -> u128 {
        transition.timeline.total_duration().unwrap().as_millis()
    }

    #[test]
    fn classic_sunset_runs_until_last_star() {
        let (t, _, _) = build(&Classic, Phase::Day);
        assert_eq!(t.end_phase, Phase::Night);
        assert_eq!(t.twinkle, TwinkleCue::Start);
        // group 3000 + night sky 1500 + last star delay 2500+500 + fade 1000
        assert_eq!(total_ms(&t), 8500);
    }

    #[test]
    fn classic_sunrise_timeline() {
        let (t, layout, _) = build(&Classic, Phase::Night);
        assert_eq!(t.end_phase, Phase::Day);
        assert_eq!(t.twinkle, TwinkleCue::Stop);
        // sunrise sky 1500, then last cloud at 2000+400 delay + 1500
        assert_eq!(total_ms(&t), 5400);
        assert_eq!(t.resets.len(), 2 * layout.star_count);
    }

    #[test]
    fn spiral_timelines() {
        let (sunset, layout, _) = build(&Spiral, Phase::Day);
        assert_eq!(total_ms(&sunset), 5500);
        assert_eq!(sunset.twinkle, TwinkleCue::Keep);
        assert_eq!(sunset.resets.len(), 1 + layout.cloud_count);

        let (sunrise, layout, _) = build(&Spiral, Phase::Night);
        assert_eq!(total_ms(&sunrise), 5500);
        assert_eq!(sunrise.twinkle, TwinkleCue::Stop);
        assert_eq!(sunrise.resets.len(), 3 + 2 * layout.star_count);
    }

    #[test]
    fn classic_sunset_ends_at_night() {
        let (t, layout, palette) = build(&Classic, Phase::Day);
        let scene = play_until(t, Phase::Day, 8500);
        assert_eq!(scene.color(ElementId::Sky), Some(palette.night_sky));
        assert_eq!(
            scene.float(ElementId::Sun, Property::Y),
            Some(layout.sky_height)
        );
        assert_eq!(scene.float(ElementId::Moon, Property::Alpha), Some(1.0));
        assert_eq!(scene.float(ElementId::Star(5), Property::Alpha), Some(1.0));
        assert_eq!(scene.float(ElementId::Cloud(2), Property::Alpha), Some(0.0));
        assert_eq!(scene.float(ElementId::SunRays, Property::Alpha), Some(0.0));
        assert_eq!(
            scene.float(ElementId::SunReflection, Property::Alpha),
            Some(0.0)
        );
        let glow = scene
            .float(ElementId::StarReflection(0), Property::Alpha)
            .unwrap();
        assert!((glow - 0.4).abs() < 1e-6);
    }

    #[test]
    fn classic_sunset_stars_wait_for_night_sky() {
        let (t, _, _) = build(&Classic, Phase::Day);
        let scene = play_until(t, Phase::Day, 6000);
        // Night sky finishes at 4500; first star fades in from 7000.
        assert_eq!(scene.float(ElementId::Star(0), Property::Alpha), Some(0.0));
    }

    #[test]
    fn sunrise_styles_end_in_day() {
        for style in [shared(Classic), shared(Spiral)] {
            let (t, layout, palette) = build(style.as_ref(), Phase::Night);
            let end = total_ms(&t) as u64;
            let scene = play_until(t, Phase::Night, end);
            assert_eq!(scene.color(ElementId::Sky), Some(palette.blue_sky));
            assert_eq!(
                scene.float(ElementId::Sun, Property::Y),
                Some(layout.sun_top)
            );
            assert_eq!(scene.float(ElementId::Moon, Property::Alpha), Some(0.0));
            assert_eq!(
                scene.float(ElementId::Cloud(0), Property::Alpha),
                Some(1.0)
            );
            assert_eq!(
                scene.float(ElementId::Star(3), Property::Alpha),
                Some(0.0)
            );
        }
    }

    #[test]
    fn spiral_sunset_needs_alpha_reset() {
        let (t, _, _) = build(&Spiral, Phase::Day);
        let resets = t.resets.clone();
        let mut scene = play_until(t, Phase::Day, 5500);
        let faded = scene.float(ElementId::Sun, Property::Alpha).unwrap();
        assert!((faded - 0.3).abs() < 1e-6);
        assert_eq!(
            scene.float(ElementId::Cloud(1), Property::TranslationY),
            Some(-100.0)
        );

        for (key, value) in resets {
            scene.apply(key, value);
        }
        assert_eq!(scene.float(ElementId::Sun, Property::Alpha), Some(1.0));
        assert_eq!(
            scene.float(ElementId::Cloud(1), Property::TranslationY),
            Some(0.0)
        );
    }

    #[test]
    fn every_write_targets_a_layout_element() {
        let layout = LayoutOptions::default();
        let scene =
            Scene::new(&layout, &PaletteOptions::default(), Phase::Day);
        let mut seen: FxHashMap<ElementId, usize> = FxHashMap::default();
        for style in [shared(Classic), shared(Spiral)] {
            for phase in [Phase::Day, Phase::Night] {
                let (t, _, _) = build(style.as_ref(), phase);
                let mut out = Vec::new();
                t.timeline.sample(ms(20_000), Duration::ZERO, &mut out);
                for write in out {
                    assert!(scene.element(write.key.element).is_some());
                    *seen.entry(write.key.element).or_default() += 1;
                }
            }
        }
        assert!(seen.contains_key(&ElementId::Sun));
        assert!(!seen.contains_key(&ElementId::Sea));
        assert!(!seen.contains_key(&ElementId::Wave(0)));
    }
}
