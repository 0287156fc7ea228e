use serde::{Deserialize, Serialize};

/// Scene-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_scene = "Space"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Start the day/night transition, same as tapping the scene.
    ToggleScene,
    /// Ask the host to stop driving the scene.
    Quit,
}
