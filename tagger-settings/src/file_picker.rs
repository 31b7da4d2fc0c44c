use std::path::PathBuf;

use async_trait::async_trait;

/// Extensions accepted for the autocomplete data file.
pub const AUTOCOMPLETE_FILE_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Asks the user for the autocomplete data file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// `None` means the user cancelled.
    async fn pick_autocomplete_file(&self) -> Option<PathBuf>;
}

/// Native open-file dialog.
#[cfg(feature = "native-dialog")]
#[derive(Debug, Clone)]
pub struct NativeFilePicker {
    title: String,
    starting_directory: Option<PathBuf>,
}

#[cfg(feature = "native-dialog")]
impl NativeFilePicker {
    pub fn new() -> Self {
        Self {
            title: "Select autocomplete file".to_string(),
            starting_directory: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_starting_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.starting_directory = Some(directory.into());
        self
    }
}

#[cfg(feature = "native-dialog")]
impl Default for NativeFilePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "native-dialog")]
#[async_trait]
impl FilePicker for NativeFilePicker {
    async fn pick_autocomplete_file(&self) -> Option<PathBuf> {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title(&self.title)
            .add_filter("Autocomplete data", AUTOCOMPLETE_FILE_EXTENSIONS);
        if let Some(directory) = &self.starting_directory {
            dialog = dialog.set_directory(directory);
        }

        let picked = dialog.pick_file().await.map(|handle| handle.path().to_path_buf());
        if picked.is_none() {
            tracing::debug!("Autocomplete file selection cancelled");
        }
        picked
    }
}
