//! Easing functions for animation interpolation.
//!
//! Provides the interpolation curves used by property animators. The
//! accelerate/decelerate family follows the usual mobile-toolkit definitions
//! so that designer-tuned timelines keep their feel.

use std::f32::consts::PI;

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Power ease-in: `t^(2·factor)`. A factor of 1 is quadratic.
    Accelerate {
        /// Strength of the curve. Values above 1 exaggerate the slow start.
        factor: f32,
    },
    /// Power ease-out: `1 - (1-t)^(2·factor)`.
    Decelerate {
        /// Strength of the curve. Values above 1 exaggerate the slow end.
        factor: f32,
    },
    /// Cosine ease-in-out. Default curve for property animators.
    AccelerateDecelerate,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: cosine accelerate/decelerate.
    pub const DEFAULT: EasingFunction = EasingFunction::AccelerateDecelerate;

    /// Standard accelerate curve (factor 1).
    pub const ACCELERATE: EasingFunction =
        EasingFunction::Accelerate { factor: 1.0 };

    /// Standard decelerate curve (factor 1).
    pub const DECELERATE: EasingFunction =
        EasingFunction::Decelerate { factor: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0] for the monotonic curves.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::Accelerate { factor } => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            EasingFunction::Decelerate { factor } => {
                let omt = 1.0 - t;
                if factor == 1.0 {
                    1.0 - omt * omt
                } else {
                    1.0 - omt.powf(2.0 * factor)
                }
            }
            EasingFunction::AccelerateDecelerate => {
                ((t + 1.0) * PI).cos() / 2.0 + 0.5
            }
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
