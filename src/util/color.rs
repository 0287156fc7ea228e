//! Packed ARGB colors and gamma-aware color interpolation.

use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::SunsetError;

/// Display gamma used when converting between sRGB-ish channels and linear
/// light for interpolation.
const GAMMA: f32 = 2.2;

/// A color packed as `0xAARRGGBB`.
///
/// Serializes as a `#AARRGGBB` hex string; `#RRGGBB` is accepted on input
/// and treated as fully opaque.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Fully transparent.
    pub const TRANSPARENT: Argb = Argb(0);

    /// Build a color from individual channels.
    #[must_use]
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(
            ((a as u32) << 24)
                | ((r as u32) << 16)
                | ((g as u32) << 8)
                | (b as u32),
        )
    }

    /// Opaque color from an `0xRRGGBB` value.
    #[must_use]
    pub const fn opaque(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels normalized to `[0, 1]` as `(r, g, b, a)`.
    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.red()),
            f32::from(self.green()),
            f32::from(self.blue()),
            f32::from(self.alpha()),
        ) / 255.0
    }

    /// Inverse of [`Argb::to_vec4`]; channels are clamped and rounded.
    #[must_use]
    pub fn from_vec4(v: Vec4) -> Self {
        let c = (v.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
        Self::from_channels(c.w as u8, c.x as u8, c.y as u8, c.z as u8)
    }

    /// Interpolate between two colors.
    ///
    /// Alpha is interpolated linearly; RGB is interpolated in linear light
    /// so that mid-points do not darken. Endpoints are returned exactly.
    #[must_use]
    pub fn lerp(self, end: Argb, fraction: f32) -> Argb {
        if fraction <= 0.0 {
            return self;
        }
        if fraction >= 1.0 {
            return end;
        }

        let start = to_linear(self.to_vec4());
        let target = to_linear(end.to_vec4());
        Self::from_vec4(to_gamma(start.lerp(target, fraction)))
    }
}

fn to_linear(v: Vec4) -> Vec4 {
    Vec4::new(v.x.powf(GAMMA), v.y.powf(GAMMA), v.z.powf(GAMMA), v.w)
}

fn to_gamma(v: Vec4) -> Vec4 {
    let inv = 1.0 / GAMMA;
    Vec4::new(v.x.powf(inv), v.y.powf(inv), v.z.powf(inv), v.w)
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({self})")
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = SunsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || SunsetError::InvalidColor(s.to_owned());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Argb::opaque(value)),
            8 => Ok(Argb(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Argb {
    type Error = SunsetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}
