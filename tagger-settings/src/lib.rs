//! Settings store for the dataset tagger.
//!
//! [`SettingsManager`] owns eleven observable fields (see [`SettingsFields`]),
//! records every user-driven change in a linear undo/redo history, and talks
//! to three collaborators:
//!
//! - a [`SettingsPersistenceProvider`] that loads, saves and compares snapshots
//!   ([`FilesystemSettingsProvider`] stores them as JSON),
//! - a [`ThemeApplier`] ([`WatchThemeApplier`] publishes on a `watch` channel),
//! - a [`FilePicker`] for the autocomplete data file (`NativeFilePicker` with
//!   the `native-dialog` feature).
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tagger_settings::{FilesystemSettingsProvider, SettingValue, SettingsManager, WatchThemeApplier};
//!
//! let config = tagger_core::ConfigLoader::load()?;
//! let mut manager = SettingsManager::new(
//!     Arc::new(FilesystemSettingsProvider::from_config(&config.settings)),
//!     Arc::new(WatchThemeApplier::default()),
//!     Arc::new(tagger_settings::NativeFilePicker::new()),
//! );
//! manager.load().await?;
//! manager.apply_theme(None);
//! manager.set(SettingValue::TaggerPort(8080));
//! manager.undo();
//! ```

pub mod errors;
pub mod events;
pub mod fields;
pub mod file_picker;
pub mod history;
pub mod keys;
pub mod manager;
pub mod observable;
pub mod persistence;
pub mod persistence_iface;
pub mod theme;
pub mod tracking;
pub mod types;


pub use errors::SettingsError;
pub use events::SettingsEvent;
pub use fields::SettingsFields;
#[cfg(feature = "native-dialog")]
pub use file_picker::NativeFilePicker;
pub use file_picker::{FilePicker, AUTOCOMPLETE_FILE_EXTENSIONS};
pub use history::{Change, ChangeHistory, ChangeRecord};
pub use keys::{SettingKey, SettingKeyParseError};
pub use manager::SettingsManager;
pub use observable::{Observable, SubscriptionId};
pub use persistence::FilesystemSettingsProvider;
pub use persistence_iface::SettingsPersistenceProvider;
pub use theme::{ThemeApplier, WatchThemeApplier};
pub use tracking::{Tracking, TrackingGuard};
pub use types::{PartialSettings, SettingValue, Settings, DEFAULT_TAGGER_PORT, DEFAULT_THEME};
