//! Error handling for the tagger core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and carries filesystem and logging failures.
//! All types are defined with `thiserror`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagger_core::error::CoreError;
//!
//! fn prepare_dirs() -> Result<(), CoreError> {
//!     let dir = tagger_core::utils::paths::get_app_config_dir()?;
//!     tagger_core::utils::fs::ensure_dir_exists(&dir)?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Core error type shared by every crate of the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// The global `tracing` subscriber could not be installed.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// Filesystem operations such as creating directories or reading files.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}
