//! Compiler configuration and renderer theme.
//!
//! Configuration is plain JSON. Every field is optional; anything left out
//! falls back to the built-in defaults, so `{}` is a valid config file.
//!
//! ```json
//! {
//!   "max_input_bytes": 262144,
//!   "theme": {
//!     "font_name": "Montserrat",
//!     "styles": { "vocabulary": { "color": [0, 102, 0], "bold": true, "font_size": 26 } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::style;
use crate::{Error, Result, StyleTag};

/// An RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Presentation preset for one style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreset {
    pub color: Rgb,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    /// Base point size the renderer uses for tagged text.
    pub font_size: u32,
}

/// Renderer-facing presets carried in the compiled document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_name: String,
    pub title_color: Rgb,
    pub text_color: Rgb,
    /// Draw an `n / total` footer on each slide.
    pub slide_numbers: bool,
    /// Animate `[step]` blocks.
    pub animations: bool,
    /// Per-tag overrides of the built-in style table.
    pub styles: BTreeMap<StyleTag, StylePreset>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_name: "Montserrat".to_string(),
            title_color: Rgb(192, 0, 0),
            text_color: Rgb(0, 0, 102),
            slide_numbers: true,
            animations: true,
            styles: BTreeMap::new(),
        }
    }
}

impl Theme {
    /// Preset for a tag: the configured override or the built-in entry.
    pub fn preset(&self, tag: StyleTag) -> StylePreset {
        self.styles
            .get(&tag)
            .copied()
            .unwrap_or_else(|| style::builtin_preset(tag))
    }

    /// A copy with every tag's preset filled in.
    pub fn resolved(&self) -> Self {
        let styles = StyleTag::ALL
            .into_iter()
            .map(|tag| (tag, self.preset(tag)))
            .collect();
        Self {
            styles,
            ..self.clone()
        }
    }
}

/// Settings for a [`Compiler`](crate::Compiler) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Inputs larger than this are rejected outright.
    pub max_input_bytes: usize,

    /// Titles longer than this (in characters) produce a warning.
    pub title_warning_length: usize,

    /// Report region text that exceeds the layout's length budget.
    pub enable_overflow_warnings: bool,

    pub theme: Theme,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            title_warning_length: 60,
            enable_overflow_warnings: true,
            theme: Theme::default(),
        }
    }
}

impl CompilerConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
