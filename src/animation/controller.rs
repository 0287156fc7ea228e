//! Scene controller handles the tap guard, style alternation and the
//! lifecycle of transitions and ambient loops.

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

use super::ambient;
use super::preferences::{StylePreferences, StyleSlot};
use super::runner::AnimationRunner;
use super::styles::StyleContext;
use super::transition::{Phase, Transition, TwinkleCue};
use crate::error::SunsetError;
use crate::options::{LayoutOptions, Options, PaletteOptions};
use crate::scene::{PropertyKey, PropertyTarget, PropertyValue};

/// Result of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A transition started.
    Started {
        /// Debug name of the transition.
        name: &'static str,
        /// Phase the scene will be in once it completes.
        end_phase: Phase,
    },
    /// A transition was already running; the tap had no effect.
    Ignored,
}

/// The transition currently holding the guard.
struct ActiveTransition {
    name: &'static str,
    runner: AnimationRunner,
    resets: Vec<(PropertyKey, PropertyValue)>,
    end_phase: Phase,
}

/// Controls the day/night cycle: when a tap starts a transition, which
/// style plays, and what happens when it completes.
///
/// Responsibilities:
/// - Guard against overlapping transitions
/// - Alternate between the primary and alternate style slots
/// - Run the active transition and the ambient loops each frame
/// - Apply resets and flip the phase on completion
pub struct SceneController {
    preferences: StylePreferences,
    layout: LayoutOptions,
    palette: PaletteOptions,
    enabled: bool,
    duration_scale: f32,
    phase: Phase,
    use_alternate: bool,
    active: Option<ActiveTransition>,
    waves: Option<AnimationRunner>,
    twinkle: Option<AnimationRunner>,
    rng: StdRng,
    completed: u64,
}

impl SceneController {
    /// Create with default style preferences.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::with_preferences(options, StylePreferences::default())
    }

    /// Create with custom style preferences.
    #[must_use]
    pub fn with_preferences(
        options: &Options,
        preferences: StylePreferences,
    ) -> Self {
        let animation = &options.animation;
        let rng = animation
            .twinkle_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            preferences,
            layout: options.layout.clone(),
            palette: options.palette.clone(),
            enabled: animation.enabled,
            duration_scale: animation.duration_scale,
            phase: animation.initial_phase,
            use_alternate: animation.start_with_alternate,
            active: None,
            waves: None,
            twinkle: None,
            rng,
            completed: 0,
        }
    }

    /// Get preferences.
    #[must_use]
    pub fn preferences(&self) -> &StylePreferences {
        &self.preferences
    }

    /// Get mutable access to preferences.
    pub fn preferences_mut(&mut self) -> &mut StylePreferences {
        &mut self.preferences
    }

    /// Enable or disable animations. Disabled transitions complete on the
    /// tap that starts them.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if animations are enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current phase. Changes only when a transition completes.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a transition is running (the tap guard).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Name of the running transition, if any.
    #[must_use]
    pub fn active_transition(&self) -> Option<&'static str> {
        self.active.as_ref().map(|active| active.name)
    }

    /// Whether the next tap plays the alternate style.
    #[must_use]
    pub fn uses_alternate(&self) -> bool {
        self.use_alternate
    }

    /// Number of transitions that have completed.
    #[must_use]
    pub fn completed_transitions(&self) -> u64 {
        self.completed
    }

    /// Whether the star twinkle loop is running.
    #[must_use]
    pub fn is_twinkling(&self) -> bool {
        self.twinkle.is_some()
    }

    /// Start the wave loop. Waves run until the controller is dropped.
    pub fn start_ambient(&mut self, now: Instant) -> Result<(), SunsetError> {
        if !self.enabled {
            log::debug!("animations disabled, waves stay still");
            return Ok(());
        }
        let waves = ambient::waves(&self.layout)?;
        self.waves = Some(AnimationRunner::new(
            Box::new(waves),
            now,
            self.duration_scale,
        ));
        Ok(())
    }

    /// Handle a tap on the scene.
    ///
    /// Ignored while a transition is running. Otherwise the style in the
    /// slot selected by the alternation flag builds the transition leaving
    /// the current phase, the guard is raised and the flag flips.
    pub fn tap(
        &mut self,
        now: Instant,
        target: &mut dyn PropertyTarget,
    ) -> Result<TapOutcome, SunsetError> {
        if let Some(active) = &self.active {
            log::debug!("tap ignored, {} still running", active.name);
            return Ok(TapOutcome::Ignored);
        }

        let slot = StyleSlot::from_flag(self.use_alternate);
        let style = self.preferences.get(slot).clone();
        let ctx = StyleContext {
            layout: &self.layout,
            palette: &self.palette,
        };
        let transition = style.transition_from(self.phase, &ctx)?;
        let Transition {
            name,
            timeline,
            resets,
            end_phase,
            twinkle,
        } = transition;
        if end_phase != self.phase.toggled() {
            log::warn!("{name} ends in {end_phase} while leaving {}", self.phase);
        }

        self.apply_twinkle_cue(twinkle, now)?;
        self.use_alternate = !self.use_alternate;
        log::info!("starting {name} ({} style, {slot:?} slot)", style.name());

        self.active = Some(ActiveTransition {
            name,
            runner: AnimationRunner::new(
                Box::new(timeline),
                now,
                self.duration_scale,
            ),
            resets,
            end_phase,
        });

        if !self.enabled {
            if let Some(active) = &mut self.active {
                active.runner.finish(target);
            }
            self.complete(target);
        }

        Ok(TapOutcome::Started { name, end_phase })
    }

    /// Update animations for the current frame.
    ///
    /// Transition writes are applied before ambient writes. Returns `true`
    /// while a transition is still running.
    pub fn update(
        &mut self,
        now: Instant,
        target: &mut dyn PropertyTarget,
    ) -> bool {
        let finished = match self.active.as_mut() {
            Some(active) => !active.runner.update(now, target),
            None => false,
        };
        if finished {
            self.complete(target);
        }

        for runner in [&mut self.waves, &mut self.twinkle].into_iter().flatten()
        {
            let _ = runner.update(now, target);
        }

        self.is_animating()
    }

    /// Apply resets, flip the phase and clear the guard.
    fn complete(&mut self, target: &mut dyn PropertyTarget) {
        let Some(active) = self.active.take() else {
            return;
        };
        for (key, value) in active.resets {
            target.apply(key, value);
        }
        self.phase = active.end_phase;
        self.completed += 1;
        log::info!("{} finished, now {}", active.name, self.phase);
    }

    fn apply_twinkle_cue(
        &mut self,
        cue: TwinkleCue,
        now: Instant,
    ) -> Result<(), SunsetError> {
        match cue {
            TwinkleCue::Keep => {}
            TwinkleCue::Start if self.enabled => {
                let twinkle = ambient::twinkle(&self.layout, &mut self.rng)?;
                log::debug!("star twinkle started");
                self.twinkle = Some(AnimationRunner::new(
                    Box::new(twinkle),
                    now,
                    self.duration_scale,
                ));
            }
            TwinkleCue::Start => {}
            TwinkleCue::Stop => {
                if self.twinkle.take().is_some() {
                    log::debug!("star twinkle stopped");
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SceneController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneController")
            .field("preferences", &self.preferences)
            .field("enabled", &self.enabled)
            .field("phase", &self.phase)
            .field("use_alternate", &self.use_alternate)
            .field("active", &self.active_transition())
            .field("twinkling", &self.is_twinkling())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::set::AnimatorSetBuilder;
    use crate::animation::styles::{shared, TransitionStyle};
    use crate::scene::{ElementId, Property, Scene};

    const FRAME: Duration = Duration::from_millis(16);

    fn options() -> Options {
        let mut options = Options::default();
        options.animation.twinkle_seed = Some(42);
        options
    }

    fn setup(options: &Options) -> (SceneController, Scene, Instant) {
        let scene = Scene::new(
            &options.layout,
            &options.palette,
            options.animation.initial_phase,
        );
        let mut controller = SceneController::new(options);
        let start = Instant::now();
        controller.start_ambient(start).unwrap();
        (controller, scene, start)
    }

    /// Step frames until the transition completes, checking the guard on
    /// every frame. Returns the instant of the completing frame.
    fn run_to_end(
        controller: &mut SceneController,
        scene: &mut Scene,
        mut now: Instant,
        start_phase: Phase,
    ) -> Instant {
        for _ in 0..2000 {
            now += FRAME;
            assert!(controller.is_animating());
            assert_eq!(controller.phase(), start_phase);
            if !controller.update(now, scene) {
                return now;
            }
        }
        panic!("transition never finished");
    }

    #[test]
    fn phase_toggles_once_per_transition() {
        let (mut controller, mut scene, start) = setup(&options());
        assert_eq!(controller.phase(), Phase::Day);

        let outcome = controller.tap(start, &mut scene).unwrap();
        assert_eq!(
            outcome,
            TapOutcome::Started {
                name: "classic sunset",
                end_phase: Phase::Night
            }
        );
        let end = run_to_end(&mut controller, &mut scene, start, Phase::Day);
        assert_eq!(controller.phase(), Phase::Night);
        assert_eq!(controller.completed_transitions(), 1);

        // Further frames leave the phase alone.
        assert!(!controller.update(end + Duration::from_secs(5), &mut scene));
        assert_eq!(controller.phase(), Phase::Night);
        assert_eq!(controller.completed_transitions(), 1);
    }

    #[test]
    fn guard_covers_the_whole_transition() {
        let (mut controller, mut scene, start) = setup(&options());
        assert!(!controller.is_animating());
        let _ = controller.tap(start, &mut scene).unwrap();
        assert!(controller.is_animating());
        let end = run_to_end(&mut controller, &mut scene, start, Phase::Day);
        assert!(!controller.is_animating());
        // Classic sunset lasts until the last star fades in.
        let elapsed = end.duration_since(start);
        assert!(elapsed >= Duration::from_millis(8500), "{elapsed:?}");
    }

    #[test]
    fn tap_while_guarded_is_a_no_op() {
        let (mut controller, mut scene, start) = setup(&options());
        let _ = controller.tap(start, &mut scene).unwrap();
        let flag = controller.uses_alternate();

        let later = start + Duration::from_millis(1000);
        let _ = controller.update(later, &mut scene);
        assert_eq!(
            controller.tap(later, &mut scene).unwrap(),
            TapOutcome::Ignored
        );
        assert_eq!(controller.uses_alternate(), flag);
        assert_eq!(controller.phase(), Phase::Day);
        assert_eq!(controller.active_transition(), Some("classic sunset"));
    }

    #[test]
    fn style_alternates_every_transition() {
        let (mut controller, mut scene, mut now) = setup(&options());
        let mut names = Vec::new();
        for _ in 0..4 {
            let start_phase = controller.phase();
            let flag = controller.uses_alternate();
            match controller.tap(now, &mut scene).unwrap() {
                TapOutcome::Started { name, .. } => names.push(name),
                TapOutcome::Ignored => panic!("tap ignored while idle"),
            }
            assert_eq!(controller.uses_alternate(), !flag);
            now = run_to_end(&mut controller, &mut scene, now, start_phase);
        }
        assert_eq!(
            names,
            [
                "classic sunset",
                "spiral sunrise",
                "classic sunset",
                "spiral sunrise"
            ]
        );
        assert_eq!(controller.phase(), Phase::Day);
    }

    #[test]
    fn resets_restore_baseline() {
        let mut options = options();
        options.animation.start_with_alternate = true;
        let (mut controller, mut scene, start) = setup(&options);

        let _ = controller.tap(start, &mut scene).unwrap();
        assert_eq!(controller.active_transition(), Some("spiral sunset"));
        let _ = run_to_end(&mut controller, &mut scene, start, Phase::Day);

        assert_eq!(scene.float(ElementId::Sun, Property::Alpha), Some(1.0));
        assert_eq!(
            scene.float(ElementId::Cloud(0), Property::TranslationY),
            Some(0.0)
        );
        assert_eq!(scene.color(ElementId::Sky), Some(options.palette.night_sky));
    }

    #[test]
    fn twinkle_runs_between_classic_sunset_and_sunrise() {
        let (mut controller, mut scene, start) = setup(&options());
        let _ = controller.tap(start, &mut scene).unwrap();
        assert!(controller.is_twinkling());
        let now = run_to_end(&mut controller, &mut scene, start, Phase::Day);
        assert!(controller.is_twinkling());

        let _ = controller.tap(now, &mut scene).unwrap();
        assert!(!controller.is_twinkling());
        let _ = run_to_end(&mut controller, &mut scene, now, Phase::Night);
        for i in options().layout.star_indices() {
            assert_eq!(
                scene.float(ElementId::Star(i), Property::ScaleX),
                Some(1.0)
            );
            assert_eq!(
                scene.float(ElementId::Star(i), Property::Alpha),
                Some(0.0)
            );
        }
    }

    #[test]
    fn disabled_transitions_complete_on_tap() {
        let mut options = options();
        options.animation.enabled = false;
        let (mut controller, mut scene, start) = setup(&options);

        let _ = controller.tap(start, &mut scene).unwrap();
        assert!(!controller.is_animating());
        assert_eq!(controller.phase(), Phase::Night);
        assert!(!controller.is_twinkling());
        assert_eq!(
            scene.float(ElementId::Sun, Property::Y),
            Some(options.layout.sky_height)
        );

        let _ = controller.tap(start, &mut scene).unwrap();
        assert_eq!(controller.phase(), Phase::Day);
        assert_eq!(controller.completed_transitions(), 2);
    }

    #[test]
    fn zero_duration_scale_finishes_on_next_frame() {
        let mut options = options();
        options.animation.duration_scale = 0.0;
        let (mut controller, mut scene, start) = setup(&options);
        let _ = controller.tap(start, &mut scene).unwrap();
        assert!(controller.is_animating());
        assert!(!controller.update(start, &mut scene));
        assert_eq!(controller.phase(), Phase::Night);
    }

    #[test]
    fn spiral_sunrise_restores_moon_and_sun() {
        let mut options = options();
        options.animation.initial_phase = Phase::Night;
        options.animation.start_with_alternate = true;
        let (mut controller, mut scene, start) = setup(&options);

        let _ = controller.tap(start, &mut scene).unwrap();
        assert_eq!(controller.active_transition(), Some("spiral sunrise"));
        let mid = start + Duration::from_millis(1000);
        let _ = controller.update(mid, &mut scene);
        assert!(
            scene.float(ElementId::Moon, Property::TranslationY).unwrap() > 0.0
        );

        let _ = run_to_end(&mut controller, &mut scene, mid, Phase::Night);
        assert_eq!(controller.phase(), Phase::Day);
        assert_eq!(
            scene.float(ElementId::Moon, Property::TranslationY),
            Some(0.0)
        );
        assert_eq!(
            scene.float(ElementId::MoonReflection, Property::TranslationY),
            Some(0.0)
        );
        assert_eq!(scene.float(ElementId::Sun, Property::Alpha), Some(1.0));
    }

    #[test]
    fn non_finite_duration_scale_still_clears_the_guard() {
        for scale in [f32::NAN, f32::INFINITY] {
            let mut options = options();
            options.animation.duration_scale = scale;
            let (mut controller, mut scene, start) = setup(&options);
            let _ = controller.tap(start, &mut scene).unwrap();
            let _ = run_to_end(&mut controller, &mut scene, start, Phase::Day);
            assert!(!controller.is_animating());
            assert_eq!(controller.phase(), Phase::Night);
        }
    }

    /// Fails to build, or builds an empty transition ending in `Day`.
    struct Stub {
        fail: bool,
    }

    impl TransitionStyle for Stub {
        fn sunset(&self, _: &StyleContext<'_>) -> Result<Transition, SunsetError> {
            if self.fail {
                return Err(SunsetError::CyclicSchedule("stub".into()));
            }
            let timeline = AnimatorSetBuilder::new("stub").build()?;
            Ok(Transition::new("stub", timeline, Phase::Day))
        }

        fn sunrise(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError> {
            self.sunset(ctx)
        }
    }

    #[test]
    fn failed_build_leaves_flag_and_guard_alone() {
        let options = options();
        let mut controller = SceneController::with_preferences(
            &options,
            StylePreferences::uniform(shared(Stub { fail: true })),
        );
        let mut scene = Scene::new(&options.layout, &options.palette, Phase::Day);
        assert!(controller.tap(Instant::now(), &mut scene).is_err());
        assert!(!controller.uses_alternate());
        assert!(!controller.is_animating());
        assert!(!controller.is_twinkling());
    }

    #[test]
    fn completion_takes_the_style_end_phase() {
        let options = options();
        let mut controller = SceneController::with_preferences(
            &options,
            StylePreferences::uniform(shared(Stub { fail: false })),
        );
        let mut scene = Scene::new(&options.layout, &options.palette, Phase::Day);
        let start = Instant::now();
        let _ = controller.tap(start, &mut scene).unwrap();
        assert!(!controller.update(start + FRAME, &mut scene));
        assert_eq!(controller.phase(), Phase::Day);
        assert_eq!(controller.completed_transitions(), 1);
    }

    #[test]
    fn night_start_plays_sunrise_first() {
        let mut options = options();
        options.animation.initial_phase = Phase::Night;
        let (mut controller, mut scene, start) = setup(&options);
        match controller.tap(start, &mut scene).unwrap() {
            TapOutcome::Started { name, end_phase } => {
                assert_eq!(name, "classic sunrise");
                assert_eq!(end_phase, Phase::Day);
            }
            TapOutcome::Ignored => panic!("tap ignored while idle"),
        }
    }
}
