//! Accessibility settings

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::axis::DEFAULT_PAN_GRANULARITY;
use crate::error::{KeyNavError, Result};
use crate::lang::LangOptions;

/// Top-level accessibility configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub keyboard_navigation: KeyboardNavigationSettings,

    /// Label templates
    pub lang: LangOptions,
}

/// Keyboard navigation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardNavigationSettings {
    /// When false, no navigation handlers are exposed
    pub enabled: bool,

    /// Steps per visible window when panning a map with the arrow keys
    pub pan_granularity: u32,
}

impl Default for KeyboardNavigationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            pan_granularity: DEFAULT_PAN_GRANULARITY,
        }
    }
}

impl AccessibilitySettings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading accessibility settings from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.keyboard_navigation.pan_granularity == 0 {
            return Err(KeyNavError::InvalidSettings(
                "keyboard_navigation.pan_granularity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
