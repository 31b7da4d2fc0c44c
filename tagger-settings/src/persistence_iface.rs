use async_trait::async_trait;

use crate::errors::SettingsError;
use crate::types::{PartialSettings, Settings};

/// Storage backend for settings snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsPersistenceProvider: Send + Sync {
    /// Loads the persisted snapshot.
    ///
    /// Fields missing from storage are `None`; the caller keeps its current
    /// values for them.
    async fn load(&self) -> Result<PartialSettings, SettingsError>;

    /// Persists a complete snapshot.
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Returns `true` iff `settings` equals the last persisted snapshot.
    async fn compare(&self, settings: &Settings) -> Result<bool, SettingsError>;
}
