use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound on indexed elements of one kind (stars, clouds, waves).
pub const MAX_INDEXED_ELEMENTS: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Scene geometry and element counts, in layout pixels.
pub struct LayoutOptions {
    /// Scene width. Taps outside `[0, width)` are ignored.
    #[schemars(title = "Width", range(min = 1.0))]
    pub width: f32,
    /// Scene height. Taps outside `[0, height)` are ignored.
    #[schemars(title = "Height", range(min = 1.0))]
    pub height: f32,
    /// Height of the sky; the sun sets to this line.
    #[schemars(title = "Sky Height", range(min = 1.0))]
    pub sky_height: f32,
    /// Layout top of the sun (its daytime position).
    #[schemars(title = "Sun Top")]
    pub sun_top: f32,
    /// Layout top of the moon.
    #[schemars(title = "Moon Top")]
    pub moon_top: f32,
    /// Number of stars (each with a reflection).
    #[schemars(title = "Stars", range(min = 0, max = 32))]
    pub star_count: usize,
    /// Number of clouds.
    #[schemars(title = "Clouds", range(min = 0, max = 32))]
    pub cloud_count: usize,
    /// Number of wave bands on the sea.
    #[schemars(title = "Waves", range(min = 0, max = 32))]
    pub wave_count: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            sky_height: 1150.0,
            sun_top: 300.0,
            moon_top: 180.0,
            star_count: 6,
            cloud_count: 3,
            wave_count: 3,
        }
    }
}

impl LayoutOptions {
    /// Star indices, capped at [`MAX_INDEXED_ELEMENTS`].
    pub fn star_indices(&self) -> impl Iterator<Item = u8> {
        indices(self.star_count)
    }

    /// Cloud indices, capped at [`MAX_INDEXED_ELEMENTS`].
    pub fn cloud_indices(&self) -> impl Iterator<Item = u8> {
        indices(self.cloud_count)
    }

    /// Wave indices, capped at [`MAX_INDEXED_ELEMENTS`].
    pub fn wave_indices(&self) -> impl Iterator<Item = u8> {
        indices(self.wave_count)
    }

    /// Whether a point lies inside the scene.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

fn indices(count: usize) -> impl Iterator<Item = u8> {
    (0..count.min(MAX_INDEXED_ELEMENTS)).map(|i| i as u8)
}
