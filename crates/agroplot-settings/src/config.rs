//! User preferences for AgroPlot
//!
//! Preferences are process-wide. They are created with defaults on first
//! read, updated with partial merges where new keys win, and stored as JSON
//! (or TOML when written to a `.toml` file).
//!
//! Stored data is read leniently: any key missing from a stored document
//! falls back to its default, so older files keep loading after new
//! preferences are added.

use agroplot_core::validation::{validate_canvas_size, CanvasSizeOptions};
use agroplot_core::CanvasSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Default auto-save interval in minutes
pub const DEFAULT_AUTO_SAVE_INTERVAL: u32 = 5;

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow system preference
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
            Self::System => write!(f, "System"),
        }
    }
}

/// Complete set of user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub theme: Theme,
    /// Show the canvas grid
    pub grid_size: bool,
    pub auto_save: bool,
    /// Minutes between auto-saves
    pub auto_save_interval: u32,
    pub default_canvas_size: CanvasSize,
    pub show_tooltips: bool,
    pub enable_sounds: bool,
    /// UI language code (e.g., "en", "es", "pt")
    pub language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            grid_size: true,
            auto_save: true,
            auto_save_interval: DEFAULT_AUTO_SAVE_INTERVAL,
            default_canvas_size: CanvasSize::default(),
            show_tooltips: true,
            enable_sounds: false,
            language: "en".to_string(),
        }
    }
}

/// Partial update of [`UserPreferences`]; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_canvas_size: Option<CanvasSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tooltips: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_sounds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PreferencesUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl UserPreferences {
    /// Create preferences with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial update in place (shallow, new values win)
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(grid_size) = update.grid_size {
            self.grid_size = grid_size;
        }
        if let Some(auto_save) = update.auto_save {
            self.auto_save = auto_save;
        }
        if let Some(interval) = update.auto_save_interval {
            self.auto_save_interval = interval;
        }
        if let Some(size) = update.default_canvas_size {
            self.default_canvas_size = size;
        }
        if let Some(show_tooltips) = update.show_tooltips {
            self.show_tooltips = show_tooltips;
        }
        if let Some(enable_sounds) = update.enable_sounds {
            self.enable_sounds = enable_sounds;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }

    /// Copy of these preferences with `update` applied
    pub fn merge(&self, update: PreferencesUpdate) -> Self {
        let mut merged = self.clone();
        merged.apply(update);
        merged
    }

    /// Validate preferences
    pub fn validate(&self) -> SettingsResult<()> {
        if self.auto_save_interval == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "autoSaveInterval".to_string(),
                reason: "must be > 0 minutes".to_string(),
            });
        }

        let canvas = validate_canvas_size(&self.default_canvas_size, &CanvasSizeOptions::default());
        if let Some(reason) = canvas.error {
            return Err(SettingsError::InvalidSetting {
                key: "defaultCanvasSize".to_string(),
                reason,
            });
        }

        if self.language.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "language".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Parse a stored JSON document; missing keys take their defaults
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        serde_json::from_str(text).map_err(|e| ConfigError::Corrupted(e.to_string()))
    }

    /// Load preferences from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let preferences: Self = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        preferences.validate()?;
        Ok(preferences)
    }

    /// Save preferences to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("none").to_string()).into()),
        }
    }
}
