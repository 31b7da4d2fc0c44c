use std::path::PathBuf;

use tagger_core::CoreError;
use thiserror::Error;

/// Failures surfaced by the settings store and its persistence providers.
///
/// A cancelled file pick is not an error; pickers report it as `None`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error during '{operation}' on {path:?}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings could not be serialized: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl SettingsError {
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}
