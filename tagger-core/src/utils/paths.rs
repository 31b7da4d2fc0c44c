//! Application-specific path resolution.
//!
//! Directories are derived from `directories-next`'s [`ProjectDirs`] using the
//! `QUALIFIER` / `ORGANIZATION` / `APPLICATION` triple below. On Linux this
//! yields e.g. `~/.config/datasettagger` and `~/.local/share/datasettagger`.
//!
//! Every function returns [`CoreError::Config`] wrapping
//! [`ConfigError::DirectoryUnavailable`] when no home directory can be found.

use std::path::PathBuf;

use directories_next::ProjectDirs;

use crate::error::{ConfigError, CoreError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "DatasetTagger";
const APPLICATION: &str = "DatasetTagger";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// Returns the application-specific configuration directory.
///
/// `config.toml` and, by default, the settings file live here.
///
/// # Examples
/// ```
/// match tagger_core::utils::paths::get_app_config_dir() {
///     Ok(path) => println!("App config directory: {}", path.display()),
///     Err(e) => eprintln!("Error getting app config dir: {}", e),
/// }
/// ```
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the application-specific local data directory.
///
/// Relative log file paths are resolved against this directory.
pub fn get_app_data_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Data").map(|dirs| dirs.data_local_dir().to_path_buf())
}
