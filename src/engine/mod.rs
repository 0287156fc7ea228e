//! The scene engine ties the scene, the controller and the input processor
//! together behind one frame-driven API.

mod accessors;
mod command;

pub use accessors::SceneSnapshot;
pub use command::SceneCommand;
use web_time::Instant;

use crate::animation::{SceneController, TapOutcome};
use crate::error::SunsetError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::Scene;

/// Headless day/night scene.
///
/// The host feeds it input events and frame instants; the engine keeps the
/// scene's element state up to date.
///
/// ```ignore
/// let mut engine = SceneEngine::new(options, Instant::now())?;
/// let _ = engine.handle_input(&InputEvent::Tap { x: 100.0, y: 200.0 }, now)?;
/// while engine.tick(now) { /* draw engine.scene() */ }
/// ```
#[derive(Debug)]
pub struct SceneEngine {
    options: Options,
    scene: Scene,
    controller: SceneController,
    input: InputProcessor,
    start_time: Instant,
    quit_requested: bool,
}

impl SceneEngine {
    /// Build the scene in its initial phase and start the ambient loops.
    pub fn new(options: Options, now: Instant) -> Result<Self, SunsetError> {
        let scene = Scene::new(
            &options.layout,
            &options.palette,
            options.animation.initial_phase,
        );
        let mut controller = SceneController::new(&options);
        controller.start_ambient(now)?;
        let input = InputProcessor::new(&options);
        log::info!(
            "scene ready: {} elements, starting at {}",
            scene.len(),
            controller.phase()
        );
        Ok(Self {
            options,
            scene,
            controller,
            input,
            start_time: now,
            quit_requested: false,
        })
    }

    /// Translate a raw input event and execute the resulting command.
    ///
    /// Returns the command that was executed, if the event mapped to one.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        now: Instant,
    ) -> Result<Option<SceneCommand>, SunsetError> {
        let Some(command) = self.input.handle_event(event) else {
            return Ok(None);
        };
        let _ = self.execute(command, now)?;
        Ok(Some(command))
    }

    /// Execute a command. Returns the tap outcome for
    /// [`SceneCommand::Toggle`].
    pub fn execute(
        &mut self,
        command: SceneCommand,
        now: Instant,
    ) -> Result<Option<TapOutcome>, SunsetError> {
        match command {
            SceneCommand::Toggle => {
                let outcome = self.controller.tap(now, &mut self.scene)?;
                Ok(Some(outcome))
            }
            SceneCommand::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
                Ok(None)
            }
        }
    }

    /// Advance every animation to `now`. Returns `true` while a transition
    /// is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controller.update(now, &mut self.scene)
    }
}
