//! AgroPlot Settings Crate
//!
//! User preferences: defaults, partial updates, validation and file storage.

pub mod config;
pub mod error;

pub use config::{
    PreferencesUpdate, Theme, UserPreferences, DEFAULT_AUTO_SAVE_INTERVAL,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
