//! The classic style: the sun sinks straight down, the sky blends through
//! sunset orange, and the stars come out once night has fallen.

use super::traits::{StyleContext, TransitionStyle};
use super::{
    join, ms, scale, sky, spin, star_scale_resets, sun_path, tween,
};
use crate::animation::set::{AnimatorSetBuilder, NodeId};
use crate::animation::transition::{Phase, Transition, TwinkleCue};
use crate::error::SunsetError;
use crate::scene::{ElementId, Property};
use crate::util::easing::EasingFunction;

/// Default style: a 3 s sun movement bracketed by sky color changes.
///
/// # Timing
///
/// Sunset: the sun, its rays, its reflection and the sunset sky animate
/// together for 3000 ms while the clouds fade. The night sky follows
/// (1500 ms) and each star fades in 2500 + 100·i ms after that. The moon and
/// the star reflections fade in on their own delays.
///
/// Sunrise: the sky warms up first (1500 ms) while the stars fade, then the
/// sun rises for 3000 ms with the day sky and the clouds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

const GROUP_MS: u64 = 3000;

impl Classic {
    /// Sun, rays and sun reflection, all anchored on the sun's path.
    fn sun_group(
        root: &mut AnimatorSetBuilder,
        ctx: &StyleContext<'_>,
        setting: bool,
    ) -> NodeId {
        let (easing, sun_scale, degrees) = if setting {
            (EasingFunction::ACCELERATE, [1.0, 0.8, 1.2, 0.9, 1.0], 360.0)
        } else {
            (EasingFunction::DECELERATE, [1.0, 1.3, 0.9, 1.1, 1.0], -360.0)
        };
        let sun = root.add(sun_path(ctx.layout, setting, GROUP_MS, easing));
        for anim in scale(ElementId::Sun, &sun_scale, GROUP_MS) {
            join(root, sun, anim);
        }
        join(root, sun, spin(ElementId::Sun, degrees, GROUP_MS));

        let (offsets, alphas, heights) = if setting {
            ([0.0, 60.0], &[0.6, 0.3, 0.0], [0.8, 0.5])
        } else {
            ([60.0, 0.0], &[0.0, 0.3, 0.6], [0.5, 0.8])
        };
        let reflection = ElementId::SunReflection;
        join(
            root,
            sun,
            tween(reflection, Property::TranslationY, &offsets, GROUP_MS)
                .with_easing(easing),
        );
        join(root, sun, tween(reflection, Property::Alpha, alphas, GROUP_MS));
        join(root, sun, tween(reflection, Property::ScaleY, &heights, GROUP_MS));

        join(root, sun, spin(ElementId::SunRays, degrees, GROUP_MS));
        for anim in scale(ElementId::SunRays, &[1.0, 1.2, 1.0], GROUP_MS) {
            join(root, sun, anim);
        }
        sun
    }

    /// Ray halo flash, independent of the sun group.
    fn ray_flash(root: &mut AnimatorSetBuilder, setting: bool) {
        let (fade_in, fade_out) = if setting {
            (
                tween(ElementId::SunRays, Property::Alpha, &[0.0, 0.8], 1000),
                tween(ElementId::SunRays, Property::Alpha, &[0.8, 0.0], 1500)
                    .with_delay(ms(1500)),
            )
        } else {
            (
                tween(ElementId::SunRays, Property::Alpha, &[0.0, 0.8], 1500)
                    .with_delay(ms(1500)),
                tween(ElementId::SunRays, Property::Alpha, &[0.8, 0.0], 1000)
                    .with_delay(ms(2500)),
            )
        };
        let _ = root.add(fade_in);
        let _ = root.add(fade_out);
    }
}

impl TransitionStyle for Classic {
    fn sunset(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError> {
        let palette = ctx.palette;
        let mut root = AnimatorSetBuilder::new("classic sunset");

        let sun = Self::sun_group(&mut root, ctx, true);
        join(&mut root, sun, sky(palette.blue_sky, palette.sunset_sky, GROUP_MS));
        for i in ctx.layout.cloud_indices() {
            join(
                &mut root,
                sun,
                tween(ElementId::Cloud(i), Property::Alpha, &[1.0, 0.0], 2000),
            );
        }

        let night = root.add(sky(palette.sunset_sky, palette.night_sky, 1500));
        root.before(sun, night);
        for i in ctx.layout.star_indices() {
            let delay = ms(2500 + 100 * u64::from(i));
            let star = root.add(
                tween(ElementId::Star(i), Property::Alpha, &[0.0, 1.0], 1000)
                    .with_delay(delay),
            );
            root.before(night, star);

            let _ = root.add(
                tween(
                    ElementId::StarReflection(i),
                    Property::Alpha,
                    &[0.0, 0.4],
                    1000,
                )
                .with_delay(delay),
            );
        }

        Self::ray_flash(&mut root, true);
        let _ = root.add(
            tween(ElementId::Moon, Property::Alpha, &[0.0, 1.0], 1500)
                .with_delay(ms(3000)),
        );
        let _ = root.add(
            tween(ElementId::MoonReflection, Property::Alpha, &[0.0, 0.5], 1500)
                .with_delay(ms(3000)),
        );

        Ok(Transition::new("classic sunset", root.build()?, Phase::Night)
            .with_twinkle(TwinkleCue::Start))
    }

    fn sunrise(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError> {
        let palette = ctx.palette;
        let mut root = AnimatorSetBuilder::new("classic sunrise");

        let dawn = root.add(sky(palette.night_sky, palette.sunset_sky, 1500));
        for i in ctx.layout.star_indices() {
            join(
                &mut root,
                dawn,
                tween(ElementId::Star(i), Property::Alpha, &[1.0, 0.0], 1000),
            );
            let _ = root.add(tween(
                ElementId::StarReflection(i),
                Property::Alpha,
                &[0.4, 0.0],
                1000,
            ));
        }

        let sun = Self::sun_group(&mut root, ctx, false);
        root.before(dawn, sun);
        join(&mut root, sun, sky(palette.sunset_sky, palette.blue_sky, GROUP_MS));
        for i in ctx.layout.cloud_indices() {
            join(
                &mut root,
                sun,
                tween(ElementId::Cloud(i), Property::Alpha, &[0.0, 1.0], 1500)
                    .with_delay(ms(2000 + 200 * u64::from(i))),
            );
        }

        Self::ray_flash(&mut root, false);
        let _ = root.add(tween(ElementId::Moon, Property::Alpha, &[1.0, 0.0], 1000));
        let _ = root.add(tween(
            ElementId::MoonReflection,
            Property::Alpha,
            &[0.5, 0.0],
            1000,
        ));

        Ok(Transition::new("classic sunrise", root.build()?, Phase::Day)
            .with_resets(star_scale_resets(ctx.layout))
            .with_twinkle(TwinkleCue::Stop))
    }

    fn name(&self) -> &'static str {
        "classic"
    }
}
