//! Shared utilities for the scene animator.
//!
//! Helpers for easing curves, ARGB color interpolation and fixed-step frame
//! timing.

pub mod color;
pub mod easing;
pub mod frame_timing;
