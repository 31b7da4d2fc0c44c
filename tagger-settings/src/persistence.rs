use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tagger_core::{ensure_dir_exists, SettingsStoreConfig};
use tracing::{debug, warn};

use super::errors::SettingsError;
use super::persistence_iface::SettingsPersistenceProvider;
use super::types::{PartialSettings, Settings};

/// Stores settings as a pretty-printed JSON file.
///
/// The provider remembers the last snapshot it read or wrote; `compare`
/// checks against that baseline and only reads the file when none is known.
#[derive(Debug)]
pub struct FilesystemSettingsProvider {
    file_path: PathBuf,
    baseline: Mutex<Option<Settings>>,
}

impl FilesystemSettingsProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            baseline: Mutex::new(None),
        }
    }

    pub fn from_config(config: &SettingsStoreConfig) -> Self {
        Self::new(config.file_path.clone())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    async fn read_partial(&self) -> Result<PartialSettings, SettingsError> {
        match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) if content.trim().is_empty() => {
                debug!("Settings file {:?} is empty, using defaults", self.file_path);
                Ok(PartialSettings::default())
            }
            Ok(content) => serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: self.file_path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Settings file {:?} not found, using defaults", self.file_path);
                Ok(PartialSettings::default())
            }
            Err(e) => Err(SettingsError::io("load", &self.file_path, e)),
        }
    }

    fn remember(&self, settings: Settings) {
        *self.baseline.lock() = Some(settings);
    }
}

#[async_trait]
impl SettingsPersistenceProvider for FilesystemSettingsProvider {
    async fn load(&self) -> Result<PartialSettings, SettingsError> {
        let partial = self.read_partial().await?;
        self.remember(Settings::default().merged_with(partial.clone()));
        debug!("Loaded settings from {:?}", self.file_path);
        Ok(partial)
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialization)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir_exists(parent)?;
            }
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, content)
            .await
            .map_err(|e| SettingsError::io("write", &temp_path, e))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.file_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(SettingsError::io("rename", &self.file_path, e));
        }

        self.remember(settings.clone());
        debug!("Saved settings to {:?}", self.file_path);
        Ok(())
    }

    async fn compare(&self, settings: &Settings) -> Result<bool, SettingsError> {
        let known = self.baseline.lock().clone();
        let baseline = match known {
            Some(baseline) => baseline,
            None => {
                let baseline = Settings::default().merged_with(self.read_partial().await?);
                self.remember(baseline.clone());
                baseline
            }
        };
        Ok(baseline == *settings)
    }
}
