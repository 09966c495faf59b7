//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::screen::DEFAULT_ITEM_COUNT;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Greeting list content
    #[serde(default)]
    pub greetings: GreetingSettings,
    /// Session restore behaviour
    #[serde(default)]
    pub session: SessionSettings,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    #[serde(default)]
    pub dark_mode: bool,
    /// Application language
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Greeting list settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingSettings {
    /// Number of generated greeting cards
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// How many times the filler sentence repeats in an expanded card
    #[serde(default = "default_body_repeat")]
    pub body_repeat: usize,
}

fn default_item_count() -> usize {
    DEFAULT_ITEM_COUNT
}

fn default_body_repeat() -> usize {
    4
}

/// Session restore settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Restore onboarding and expanded cards from the last run
    #[serde(default = "default_true")]
    pub restore: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: default_language(),
        }
    }
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            body_repeat: default_body_repeat(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { restore: true }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "greetings", "Greetings")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    if path.exists() {
                        tracing::warn!("Falling back to default settings: {}", e);
                    }
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
