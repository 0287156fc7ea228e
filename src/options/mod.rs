//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (palette, layout, animation playback,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! scene can be described by a preset file.

mod animation;
mod keybindings;
mod layout;
mod palette;

use std::path::Path;

pub use animation::AnimationOptions;
pub use keybindings::KeybindingOptions;
pub use layout::{LayoutOptions, MAX_INDEXED_ELEMENTS};
pub use palette::PaletteOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SunsetError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[palette]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sky and sea colors.
    #[schemars(skip)]
    pub palette: PaletteOptions,
    /// Scene geometry and element counts.
    pub layout: LayoutOptions,
    /// Transition playback settings.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SunsetError> {
        let content = std::fs::read_to_string(path).map_err(SunsetError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse and validate options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SunsetError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SunsetError::OptionsParse(e.to_string()))?;
        options.animation.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SunsetError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SunsetError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SunsetError::Io)?;
        }
        std::fs::write(path, content).map_err(SunsetError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
