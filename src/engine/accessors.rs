//! Read access to the engine's state.

use serde::Serialize;
use web_time::Instant;

use super::SceneEngine;
use crate::animation::{Phase, SceneController};
use crate::options::Options;
use crate::scene::{ElementSnapshot, Scene};

/// Serializable view of one frame, written as a JSON line by the trace
/// output of the binary.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    /// Milliseconds since the engine was created.
    pub elapsed_ms: u64,
    /// Phase at snapshot time.
    pub phase: Phase,
    /// Whether a transition was running.
    pub animating: bool,
    /// Name of the running transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<&'static str>,
    /// Every element in draw order.
    pub elements: Vec<ElementSnapshot>,
}

impl SceneEngine {
    /// Current element state.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The controller driving transitions.
    #[must_use]
    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    /// Mutable controller access, e.g. to change style preferences.
    pub fn controller_mut(&mut self) -> &mut SceneController {
        &mut self.controller
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether a [`Quit`](super::SceneCommand::Quit) command was executed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Capture the scene at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> SceneSnapshot {
        SceneSnapshot {
            elapsed_ms: now.duration_since(self.start_time).as_millis() as u64,
            phase: self.controller.phase(),
            animating: self.controller.is_animating(),
            transition: self.controller.active_transition(),
            elements: self.scene.snapshot(),
        }
    }
}
