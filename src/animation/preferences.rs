//! Style preferences map style slots to transition styles.
//!
//! Taps alternate between the two slots; users can customize which style
//! fills each one.

use super::styles::{shared, Classic, SharedStyle, Spiral};

/// The two slots taps alternate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// Played when the alternation flag is clear.
    Primary,
    /// Played when the alternation flag is set.
    Alternate,
}

impl StyleSlot {
    /// Slot selected by the alternation flag.
    #[must_use]
    pub const fn from_flag(use_alternate: bool) -> Self {
        if use_alternate {
            Self::Alternate
        } else {
            Self::Primary
        }
    }
}

/// User-configurable mapping from slots to transition styles.
#[derive(Clone)]
pub struct StylePreferences {
    /// Style for the primary slot.
    pub primary: SharedStyle,
    /// Style for the alternate slot.
    pub alternate: SharedStyle,
}

impl StylePreferences {
    /// Style for a given slot.
    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> &SharedStyle {
        match slot {
            StyleSlot::Primary => &self.primary,
            StyleSlot::Alternate => &self.alternate,
        }
    }

    /// Set the style for a given slot.
    pub fn set(&mut self, slot: StyleSlot, style: SharedStyle) {
        match slot {
            StyleSlot::Primary => self.primary = style,
            StyleSlot::Alternate => self.alternate = style,
        }
    }

    /// Use the same style in both slots.
    #[must_use]
    pub fn uniform(style: SharedStyle) -> Self {
        Self {
            primary: style.clone(),
            alternate: style,
        }
    }
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            primary: shared(Classic),
            alternate: shared(Spiral),
        }
    }
}

impl std::fmt::Debug for StylePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StylePreferences")
            .field("primary", &self.primary.name())
            .field("alternate", &self.alternate.name())
            .finish()
    }
}
