//! Animation system for the day/night transitions.
//!
//! Property animators tween one element property over time. Animator sets
//! compose them with start-relative relations ("with", "before", "after")
//! into a single timeline. Transition styles build such timelines for the
//! sunset and the sunrise, and the [`SceneController`] decides when they
//! play.

pub mod ambient;
pub mod controller;
pub mod preferences;
pub mod property;
pub mod runner;
pub mod set;
pub mod styles;
pub mod traits;
pub mod transition;

pub use controller::{SceneController, TapOutcome};
pub use preferences::{StylePreferences, StyleSlot};
pub use property::{Keyframes, PropertyAnimator, RepeatCount, RepeatMode};
pub use runner::AnimationRunner;
pub use set::{AnimatorSet, AnimatorSetBuilder, NodeId};
pub use traits::{Animation, BoxedAnimation, PropertyWrite};
pub use transition::{Phase, Transition, TwinkleCue};
