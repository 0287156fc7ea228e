//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a tap, a key press or
//! a programmatic call, is represented as a `SceneCommand`. Consumers
//! construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

/// A discrete operation the engine can perform.
///
/// ```ignore
/// engine.execute(SceneCommand::Toggle, now)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneCommand {
    /// Start the transition to the other phase. Ignored while one is
    /// running.
    Toggle,
    /// Ask the host loop to stop.
    Quit,
}
