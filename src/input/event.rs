/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SceneCommand`](crate::engine::SceneCommand) values.
///
/// # Example
///
/// ```
/// use sunset::input::{InputEvent, InputProcessor};
/// use sunset::options::Options;
///
/// let processor = InputProcessor::new(&Options::default());
/// let cmd = processor.handle_event(&InputEvent::Tap { x: 10.0, y: 20.0 });
/// assert!(cmd.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A tap (or click) on the scene at a layout position.
    Tap {
        /// Horizontal position in layout pixels.
        x: f32,
        /// Vertical position in layout pixels.
        y: f32,
    },
    /// A key press, named like `"Space"` or `"KeyQ"`.
    Key(String),
}
