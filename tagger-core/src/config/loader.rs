//! Configuration loading.
//!
//! [`ConfigLoader::load`] reads `config.toml` from the application config
//! directory. A missing file yields [`CoreConfig::default`]; the result is
//! validated either way:
//! - log level and format are normalised to lower case and checked,
//! - a relative log file path is resolved against the app data directory,
//! - a relative settings file path is resolved against the config directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::defaults::CONFIG_FILE_NAME;
use super::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs::read_optional_to_string;
use crate::utils::paths::{get_app_config_dir, get_app_data_dir};

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the application config directory.
    ///
    /// ```rust,ignore
    /// match tagger_core::config::ConfigLoader::load() {
    ///     Ok(config) => println!("Settings file: {}", config.settings.file_path.display()),
    ///     Err(e) => eprintln!("Error loading config: {}", e),
    /// }
    /// ```
    pub fn load() -> Result<CoreConfig, CoreError> {
        let config_dir = get_app_config_dir()?;
        Self::load_from_path(&config_dir.join(CONFIG_FILE_NAME))
    }

    /// Loads and validates the configuration from an explicit file.
    ///
    /// Relative settings paths are resolved against the file's parent directory.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = read_optional_to_string(path).map_err(|e| match e {
            CoreError::Filesystem { path, source, .. } => {
                CoreError::Config(ConfigError::ReadError { path, source })
            }
            other => other,
        })?;

        let mut config = match content {
            Some(content) if !content.trim().is_empty() => {
                toml::from_str::<CoreConfig>(&content).map_err(ConfigError::ParseError)?
            }
            _ => {
                debug!("No configuration at {:?}, using defaults", path);
                CoreConfig::default()
            }
        };

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
        Self::validate_config(&mut config, &base_dir)?;
        Ok(config)
    }

    fn validate_config(config: &mut CoreConfig, config_dir: &Path) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format = config.logging.format.to_lowercase();
        match format.as_str() {
            "text" | "json" => config.logging.format = format,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(log_path) = &config.logging.file_path {
            if log_path.is_relative() {
                config.logging.file_path = Some(get_app_data_dir()?.join(log_path));
            }
        }

        if config.settings.file_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "settings.file_path must not be empty".to_string(),
            )
            .into());
        }
        if config.settings.file_path.is_relative() {
            config.settings.file_path = config_dir.join(&config.settings.file_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults_with_resolved_settings_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.settings.file_path, dir.path().join("settings.json"));
    }

    #[test]
    fn test_levels_and_formats_are_normalised() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[logging]\nlevel = \"DEBUG\"\nformat = \"Json\"\n");

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_absolute_settings_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("elsewhere").join("s.json");
        let path = write_config(&dir, &format!("[settings]\nfile_path = {:?}\n", target));

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.settings.file_path, target);
    }

    #[rstest]
    #[case("[logging]\nlevel = \"loud\"\n")]
    #[case("[logging]\nformat = \"xml\"\n")]
    #[case("[settings]\nfile_path = \"\"\n")]
    fn test_invalid_values_are_rejected(#[case] content: &str) {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, content);

        match ConfigLoader::load_from_path(&path) {
            Err(CoreError::Config(ConfigError::ValidationError(_))) => {}
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[logging\nlevel = ");

        assert!(matches!(
            ConfigLoader::load_from_path(&path),
            Err(CoreError::Config(ConfigError::ParseError(_)))
        ));
    }
}
