//! Filesystem utilities.
//!
//! Thin wrappers around `std::fs` that report failures as
//! [`CoreError::Filesystem`] with the offending path attached.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CoreError;

/// Ensures that a directory exists at the given path, creating it and any
/// missing parents.
///
/// Fails if the path exists but is not a directory.
///
/// # Examples
///
/// ```no_run
/// # use tagger_core::utils::fs::ensure_dir_exists;
/// let temp_dir = tempfile::tempdir().unwrap();
/// let dir_path = temp_dir.path().join("logs");
/// ensure_dir_exists(&dir_path).unwrap();
/// assert!(dir_path.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads a file to a string, treating a missing file as `Ok(None)`.
///
/// Any other I/O failure is returned as [`CoreError::Filesystem`].
pub fn read_optional_to_string(path: &Path) -> Result<Option<String>, CoreError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::Filesystem {
            message: "Failed to read file to string".to_string(),
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
