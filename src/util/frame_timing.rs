//! Fixed-step frame timing for headless playback.

use web_time::{Duration, Instant};

/// Fixed-step frame clock.
///
/// Produces evenly spaced frame instants starting at an origin, without
/// sleeping. Used to drive the scene headlessly so that a run is
/// reproducible regardless of host speed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Target FPS (0 is treated as 60)
    target_fps: u32,
    /// Duration of a single frame based on target FPS
    frame_duration: Duration,
    /// Instant of frame zero
    origin: Instant,
    /// Number of frames produced so far
    frame: u64,
}

impl FrameClock {
    /// Create a new clock with the given FPS target, starting at `origin`.
    #[must_use]
    pub fn new(target_fps: u32, origin: Instant) -> Self {
        let target_fps = if target_fps == 0 { 60 } else { target_fps };
        Self {
            target_fps,
            frame_duration: Duration::from_secs_f64(
                1.0 / f64::from(target_fps),
            ),
            origin,
            frame: 0,
        }
    }

    /// Instant of the current frame.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    /// Time since the origin at the current frame.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frame_duration.mul_f64(self.frame as f64)
    }

    /// Advance one frame and return its instant.
    pub fn advance(&mut self) -> Instant {
        self.frame += 1;
        self.now()
    }

    /// Index of the current frame.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get the configured frames per second.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.target_fps
    }
}
