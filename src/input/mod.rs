//! Input handling: event types, key actions, and the input processor that
//! converts raw host events into scene commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
mod keyboard;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
