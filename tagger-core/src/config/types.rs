//! Configuration data structures.
//!
//! These structs are deserialized from `config.toml`. Missing fields fall back
//! to [`super::defaults`], unknown fields are rejected.

use std::path::PathBuf;

use serde::Deserialize;

use super::defaults;

/// Configuration for the logging subsystem.
///
/// # Examples
///
/// ```
/// use tagger_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/tagger.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/tagger.log")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the app data directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Where the settings snapshot is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsStoreConfig {
    /// Settings file. Relative paths are resolved against the directory holding `config.toml`.
    #[serde(default = "defaults::default_settings_file_path")]
    pub file_path: PathBuf,
}

impl Default for SettingsStoreConfig {
    fn default() -> Self {
        defaults::default_settings_store_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use tagger_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [settings]
/// file_path = "/srv/tagger/settings.json"
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.logging.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_settings_store_config")]
    pub settings: SettingsStoreConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            settings: defaults::default_settings_store_config(),
        }
    }
}
