use serde::{Deserialize, Serialize};

use crate::util::color::Argb;

/// Color palette for the sky and sea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteOptions {
    /// Daytime sky.
    pub blue_sky: Argb,
    /// Intermediate sky shown between day and night.
    pub sunset_sky: Argb,
    /// Night sky.
    pub night_sky: Argb,
    /// Sea backdrop. Not animated.
    pub sea: Argb,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            blue_sky: Argb::opaque(0x1E_7AC7),
            sunset_sky: Argb::opaque(0xEC_8100),
            night_sky: Argb::opaque(0x05_192E),
            sea: Argb::opaque(0x22_4869),
        }
    }
}
