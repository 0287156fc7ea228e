//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns the key-binding map and the scene bounds. It is
//! the only thing that sits between raw host events and the engine's
//! [`execute`](crate::engine::SceneEngine::execute) method.

use super::event::InputEvent;
use crate::engine::SceneCommand;
use crate::input::KeyAction;
use crate::options::{KeybindingOptions, LayoutOptions, Options};

/// Converts raw host events into [`SceneCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     engine.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Scene bounds; taps outside are dropped.
    layout: LayoutOptions,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor for the layout and bindings in `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            layout: options.layout.clone(),
            key_bindings: options.keybindings.clone(),
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SceneCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::ToggleScene => SceneCommand::Toggle,
            KeyAction::Quit => SceneCommand::Quit,
        })
    }

    /// Process a raw input event and return zero or one commands.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::Tap { x, y } => {
                if self.layout.contains(*x, *y) {
                    Some(SceneCommand::Toggle)
                } else {
                    log::debug!("tap at ({x}, {y}) is outside the scene");
                    None
                }
            }
            InputEvent::Key(key) => self.handle_key_press(key),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_inside_scene_toggles() {
        let processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(&InputEvent::Tap { x: 540.0, y: 960.0 }),
            Some(SceneCommand::Toggle)
        );
    }

    #[test]
    fn tap_outside_scene_is_dropped() {
        let processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(&InputEvent::Tap { x: -1.0, y: 10.0 }),
            None
        );
        assert_eq!(
            processor.handle_event(&InputEvent::Tap {
                x: 10.0,
                y: 1920.0
            }),
            None
        );
    }

    #[test]
    fn bound_keys_map_to_commands() {
        let processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(&InputEvent::Key("Space".into())),
            Some(SceneCommand::Toggle)
        );
        assert_eq!(
            processor.handle_key_press("Escape"),
            Some(SceneCommand::Quit)
        );
        assert_eq!(processor.handle_key_press("KeyQ"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut processor = InputProcessor::default();
        processor
            .key_bindings_mut()
            .bind(KeyAction::ToggleScene, "Enter");
        assert_eq!(
            processor.handle_key_press("Enter"),
            Some(SceneCommand::Toggle)
        );
        assert_eq!(processor.handle_key_press("Space"), None);
    }
}
