//! The spiral style: the sun spins and pulses on its way, clouds drift, and
//! the moon rises or sets with its reflection.

use super::traits::{StyleContext, TransitionStyle};
use super::{join, ms, reset, scale, sky, spin, star_scale_resets, sun_path, tween};
use crate::animation::set::{AnimatorSet, AnimatorSetBuilder, NodeId};
use crate::animation::transition::{Phase, Transition, TwinkleCue};
use crate::error::SunsetError;
use crate::scene::{ElementId, Property};
use crate::util::easing::EasingFunction;

/// Alternate style: a 3.5 s spinning sun with staggered surroundings.
///
/// # Timing
///
/// Sunset: the sun group (3500 ms) is followed by the night sky (2000 ms).
/// Clouds fade while rising, stars cascade in from 2800 ms in 150 ms steps,
/// and the moon rises with its reflection from 2500 ms.
///
/// Sunrise: the sky warms up (2000 ms) before the sun group. The moon sets,
/// stars vanish quickly and clouds drift down from 2500 ms in 250 ms steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spiral;

const GROUP_MS: u64 = 3500;

/// Per-direction keyframes of the sun group.
struct SunMotion {
    easing: EasingFunction,
    degrees: f32,
    sun_scale: [f32; 5],
    sun_alpha: [f32; 5],
    reflection_offset: [f32; 2],
    reflection_alpha: [f32; 5],
    reflection_height: [f32; 2],
    ray_scale: [f32; 5],
}

const SETTING: SunMotion = SunMotion {
    easing: EasingFunction::Accelerate { factor: 1.5 },
    degrees: 720.0,
    sun_scale: [1.0, 1.5, 0.7, 1.2, 0.5],
    sun_alpha: [1.0, 0.8, 1.0, 0.6, 0.3],
    reflection_offset: [0.0, 80.0],
    reflection_alpha: [0.6, 0.4, 0.6, 0.2, 0.0],
    reflection_height: [0.8, 0.3],
    ray_scale: [1.0, 1.5, 0.8, 1.3, 0.5],
};

const RISING: SunMotion = SunMotion {
    easing: EasingFunction::Decelerate { factor: 2.0 },
    degrees: -540.0,
    sun_scale: [0.3, 0.8, 1.3, 0.9, 1.0],
    sun_alpha: [0.3, 0.6, 1.0, 0.8, 1.0],
    reflection_offset: [80.0, 0.0],
    reflection_alpha: [0.0, 0.2, 0.6, 0.4, 0.6],
    reflection_height: [0.3, 0.8],
    ray_scale: [0.5, 1.0, 1.5, 1.2, 1.0],
};

impl Spiral {
    fn sun_group(
        root: &mut AnimatorSetBuilder,
        ctx: &StyleContext<'_>,
        setting: bool,
    ) -> NodeId {
        let motion = if setting { &SETTING } else { &RISING };
        let sun = root.add(sun_path(ctx.layout, setting, GROUP_MS, motion.easing));
        join(root, sun, spin(ElementId::Sun, motion.degrees, GROUP_MS));
        for anim in scale(ElementId::Sun, &motion.sun_scale, GROUP_MS) {
            join(root, sun, anim);
        }
        join(
            root,
            sun,
            tween(ElementId::Sun, Property::Alpha, &motion.sun_alpha, GROUP_MS),
        );

        let reflection = ElementId::SunReflection;
        join(
            root,
            sun,
            tween(
                reflection,
                Property::TranslationY,
                &motion.reflection_offset,
                GROUP_MS,
            )
            .with_easing(motion.easing),
        );
        join(
            root,
            sun,
            tween(reflection, Property::Alpha, &motion.reflection_alpha, GROUP_MS),
        );
        join(
            root,
            sun,
            tween(reflection, Property::ScaleY, &motion.reflection_height, GROUP_MS),
        );

        join(root, sun, spin(ElementId::SunRays, motion.degrees, GROUP_MS));
        for anim in scale(ElementId::SunRays, &motion.ray_scale, GROUP_MS) {
            join(root, sun, anim);
        }
        sun
    }

    /// Fade and vertical drift played together as one nested set.
    fn drift(
        name: &'static str,
        element: ElementId,
        offsets: [f32; 2],
        alphas: [f32; 2],
        millis: u64,
        delay: u64,
    ) -> Result<AnimatorSet, SunsetError> {
        let mut set = AnimatorSetBuilder::new(name).with_start_delay(ms(delay));
        let fade = set.add(tween(element, Property::Alpha, &alphas, millis));
        let moving = set.add(tween(element, Property::TranslationY, &offsets, millis));
        set.play_together(&[fade, moving]);
        set.build()
    }
}

impl TransitionStyle for Spiral {
    fn sunset(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError> {
        let palette = ctx.palette;
        let mut root = AnimatorSetBuilder::new("spiral sunset");

        let sun = Self::sun_group(&mut root, ctx, true);
        join(&mut root, sun, sky(palette.blue_sky, palette.sunset_sky, 2500));
        let night = root.add(sky(palette.sunset_sky, palette.night_sky, 2000));
        root.before(sun, night);

        for i in ctx.layout.cloud_indices() {
            let _ = root.add(Self::drift(
                "cloud rise",
                ElementId::Cloud(i),
                [0.0, -100.0],
                [1.0, 0.0],
                2500,
                0,
            )?);
        }
        for i in ctx.layout.star_indices() {
            let delay = ms(2800 + 150 * u64::from(i));
            let _ = root.add(
                tween(ElementId::Star(i), Property::Alpha, &[0.0, 1.0], 800)
                    .with_delay(delay),
            );
            let _ = root.add(
                tween(
                    ElementId::StarReflection(i),
                    Property::Alpha,
                    &[0.0, 0.4],
                    800,
                )
                .with_delay(delay),
            );
        }

        let _ = root.add(Self::drift(
            "moon rise",
            ElementId::Moon,
            [100.0, 0.0],
            [0.0, 1.0],
            2000,
            2500,
        )?);
        let _ = root.add(Self::drift(
            "moon reflection rise",
            ElementId::MoonReflection,
            [100.0, 0.0],
            [0.0, 0.5],
            2000,
            2500,
        )?);

        let _ = root.add(tween(ElementId::SunRays, Property::Alpha, &[0.0, 1.0], 1200));
        let _ = root.add(
            tween(ElementId::SunRays, Property::Alpha, &[1.0, 0.0], 1500)
                .with_delay(ms(2000)),
        );

        let resets = std::iter::once(reset(ElementId::Sun, Property::Alpha, 1.0)).chain(
            ctx.layout
                .cloud_indices()
                .map(|i| reset(ElementId::Cloud(i), Property::TranslationY, 0.0)),
        );
        Ok(Transition::new("spiral sunset", root.build()?, Phase::Night)
            .with_resets(resets))
    }

    fn sunrise(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError> {
        let palette = ctx.palette;
        let mut root = AnimatorSetBuilder::new("spiral sunrise");

        let dawn = root.add(sky(palette.night_sky, palette.sunset_sky, 2000));
        let sun = Self::sun_group(&mut root, ctx, false);
        root.before(dawn, sun);
        join(&mut root, sun, sky(palette.sunset_sky, palette.blue_sky, 2500));

        for i in ctx.layout.star_indices() {
            let _ = root.add(tween(ElementId::Star(i), Property::Alpha, &[1.0, 0.0], 800));
            let _ = root.add(tween(
                ElementId::StarReflection(i),
                Property::Alpha,
                &[0.4, 0.0],
                800,
            ));
        }
        let _ = root.add(Self::drift(
            "moon set",
            ElementId::Moon,
            [0.0, 100.0],
            [1.0, 0.0],
            1500,
            0,
        )?);
        let _ = root.add(Self::drift(
            "moon reflection set",
            ElementId::MoonReflection,
            [0.0, 100.0],
            [0.5, 0.0],
            1500,
            0,
        )?);
        for i in ctx.layout.cloud_indices() {
            let _ = root.add(Self::drift(
                "cloud drift",
                ElementId::Cloud(i),
                [-100.0, 0.0],
                [0.0, 1.0],
                2000,
                2500 + 250 * u64::from(i),
            )?);
        }

        let _ = root.add(
            tween(ElementId::SunRays, Property::Alpha, &[0.0, 1.0], 1800)
                .with_delay(ms(1500)),
        );
        let _ = root.add(
            tween(ElementId::SunRays, Property::Alpha, &[1.0, 0.0], 1000)
                .with_delay(ms(3000)),
        );

        let resets = [
            reset(ElementId::Sun, Property::Alpha, 1.0),
            reset(ElementId::Moon, Property::TranslationY, 0.0),
            reset(ElementId::MoonReflection, Property::TranslationY, 0.0),
        ];
        Ok(Transition::new("spiral sunrise", root.build()?, Phase::Day)
            .with_resets(resets.into_iter().chain(star_scale_resets(ctx.layout)))
            .with_twinkle(TwinkleCue::Stop))
    }

    fn name(&self) -> &'static str {
        "spiral"
    }
}
