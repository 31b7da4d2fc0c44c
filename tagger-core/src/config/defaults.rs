//! Default configuration values.
//!
//! Referenced from `#[serde(default = "...")]` attributes in [`super::types`].

use std::path::PathBuf;

use super::types::{LoggingConfig, SettingsStoreConfig};

/// File name of the persisted settings snapshot.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File name of the core configuration inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(crate) fn default_settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE_NAME)
}

pub(crate) fn default_settings_store_config() -> SettingsStoreConfig {
    SettingsStoreConfig {
        file_path: default_settings_file_path(),
    }
}
