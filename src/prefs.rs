//! The user preference record and JSON preset import/export.
//!
//! `Preferences` is an explicit immutable record passed by value: importing a
//! preset constructs a fresh record and never touches existing state, so a
//! malformed payload can be rejected without partial application. Every field
//! has a serde default, making imports tolerant of any subset of fields.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::StyleFlags;
use crate::presets;

/// Version tag written into exported presets.
///
/// Informal: imports accept any payload that deserializes, the tag exists so
/// future revisions can tell old presets apart.
pub const PRESET_VERSION: u32 = 1;

/// Errors from preset import/export.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("Invalid preset: {0}")]
    InvalidPreset(#[from] serde_json::Error),
}

/// Everything the generator needs for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Preset format version tag.
    pub preset_version: u32,
    /// Ordered gradient stop colors as hex strings.
    pub colors: Vec<String>,
    /// Input text; empty falls back to [`Preferences::DEFAULT_TEXT`].
    pub text: String,
    /// Output format template.
    pub format: String,
    /// Format character prefixed to each style code.
    pub formatchar: String,
    /// Literal prefix prepended to the payload (e.g. a command).
    pub prefix: String,
    /// Style toggles, flattened for compatibility with exported presets.
    #[serde(flatten)]
    pub styles: StyleFlags,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            preset_version: PRESET_VERSION,
            colors: presets::PRESETS[0]
                .stops
                .iter()
                .map(|s| s.to_string())
                .collect(),
            text: Self::DEFAULT_TEXT.to_string(),
            format: presets::FORMATS[0].to_string(),
            formatchar: "&".to_string(),
            prefix: String::new(),
            styles: StyleFlags::default(),
        }
    }
}

impl Preferences {
    /// Fallback text used when the input is empty or all-whitespace.
    pub const DEFAULT_TEXT: &'static str = "hexgrad";

    /// Parse a JSON preset into a fresh record.
    ///
    /// Unknown fields are ignored, missing fields take their defaults. An
    /// unparsable payload is a distinct error and constructs nothing.
    pub fn from_json(json: &str) -> Result<Self, PrefsError> {
        let prefs: Self = serde_json::from_str(json)?;
        debug!(colors = prefs.colors.len(), "imported preset");
        Ok(prefs)
    }

    /// Serialize as a JSON preset, carrying the current version tag.
    pub fn to_json(&self) -> Result<String, PrefsError> {
        let mut prefs = self.clone();
        prefs.preset_version = PRESET_VERSION;
        Ok(serde_json::to_string(&prefs)?)
    }
}
