//! Core trait for transition styles.

use std::sync::Arc;

use crate::animation::transition::{Phase, Transition};
use crate::error::SunsetError;
use crate::options::{LayoutOptions, PaletteOptions};

/// Everything a style needs to know about the scene it animates.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    /// Element positions and counts.
    pub layout: &'a LayoutOptions,
    /// Sky colors the transitions blend between.
    pub palette: &'a PaletteOptions,
}

/// A family of motion and timing choices for the day/night switch.
///
/// Implementations build a fresh [`Transition`] per call, so the same style
/// can be reused for every tap. See [`Classic`](super::Classic) and
/// [`Spiral`](super::Spiral).
pub trait TransitionStyle: Send + Sync {
    /// Day → night transition.
    fn sunset(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError>;

    /// Night → day transition.
    fn sunrise(&self, ctx: &StyleContext<'_>) -> Result<Transition, SunsetError>;

    /// Transition leaving `phase`.
    fn transition_from(
        &self,
        phase: Phase,
        ctx: &StyleContext<'_>,
    ) -> Result<Transition, SunsetError> {
        match phase {
            Phase::Day => self.sunset(ctx),
            Phase::Night => self.sunrise(ctx),
        }
    }

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared style references.
pub type SharedStyle = Arc<dyn TransitionStyle>;

/// Create a shared style from any TransitionStyle implementation.
#[must_use]
pub fn shared<S: TransitionStyle + 'static>(style: S) -> SharedStyle {
    Arc::new(style)
}
